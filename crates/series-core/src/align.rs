// File: crates/series-core/src/align.rs
// Summary: Alignment of raw value arrays onto a canonical date axis.

use crate::types::Point;

/// Length of a date-only key (`YYYY-MM-DD`).
pub const DATE_KEY_LEN: usize = 10;

/// Truncate an upstream ISO-8601 timestamp to its date-only prefix: the
/// text before `T`, capped at `DATE_KEY_LEN` bytes. Plain dates pass
/// through unchanged.
pub fn date_key(raw: &str) -> &str {
    let head = raw.split('T').next().unwrap_or(raw);
    head.get(..DATE_KEY_LEN).unwrap_or(head)
}

/// Align `values` to `dates` by left-padding with missing markers.
///
/// `pad = max(0, n - m)` markers are conceptually prepended and the first
/// `n` entries kept, so the tail of `values` lines up with the tail of
/// `dates` (indicator warm-up produces fewer points than raw dates; the
/// shortfall is assumed to be at the start). Surplus trailing values are
/// truncated. A missing input behaves as an empty array; length mismatches
/// are never an error.
///
/// Trailing gaps (not-yet-computed recent days) would be misattributed to
/// the warm-up prefix by this policy; upstream does not produce them.
pub fn align(dates: &[String], values: Option<&[Option<f64>]>) -> Vec<Point> {
    let raw = values.unwrap_or(&[]);
    let pad = dates.len().saturating_sub(raw.len());
    dates
        .iter()
        .enumerate()
        .map(|(i, x)| {
            let y = if i < pad { None } else { raw.get(i - pad).copied().flatten() };
            Point::new(x.clone(), y)
        })
        .collect()
}

/// Align `values` to `dates` index-for-index, with no padding.
///
/// Used once the upstream source is known to emit equal-length arrays;
/// indices past the end of `values` yield missing points.
pub fn align_direct(dates: &[String], values: &[Option<f64>]) -> Vec<Point> {
    dates
        .iter()
        .enumerate()
        .map(|(i, x)| Point::new(x.clone(), values.get(i).copied().flatten()))
        .collect()
}
