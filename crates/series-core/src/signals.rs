// File: crates/series-core/src/signals.rs
// Summary: Boolean signal overlays marking notable dates on a base series.

use crate::types::Point;

/// A base observation plus the names of every signal that fired at its
/// date.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalRow {
    pub x: String,
    pub y: Option<f64>,
    pub fired: Vec<String>,
}

impl SignalRow {
    /// Whether any signal fired at this date (the marker predicate).
    pub fn has_signal(&self) -> bool {
        !self.fired.is_empty()
    }
}

/// Overlay named boolean signal arrays onto a base series.
///
/// Each array is aligned to the base length with the same left-pad policy
/// as value series (missing flags pad the front); only a literal `true`
/// fires, never `null` or an absent entry. Fired names keep the order
/// the signals were passed in.
pub fn mark_signals(base: &[Point], signals: &[(&str, &[Option<bool>])]) -> Vec<SignalRow> {
    let n = base.len();
    let aligned: Vec<(&str, Vec<bool>)> = signals
        .iter()
        .map(|(name, flags)| (*name, align_flags(n, flags)))
        .collect();
    base.iter()
        .enumerate()
        .map(|(i, p)| {
            let fired = aligned
                .iter()
                .filter(|(_, flags)| flags[i])
                .map(|(name, _)| (*name).to_string())
                .collect();
            SignalRow { x: p.x.clone(), y: p.y, fired }
        })
        .collect()
}

fn align_flags(n: usize, flags: &[Option<bool>]) -> Vec<bool> {
    let pad = n.saturating_sub(flags.len());
    (0..n)
        .map(|i| i >= pad && flags.get(i - pad).copied().flatten() == Some(true))
        .collect()
}
