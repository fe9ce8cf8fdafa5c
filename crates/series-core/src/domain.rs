// File: crates/series-core/src/domain.rs
// Summary: Padded value domains and nice tick generation for visible slices.

/// Default number of ticks requested from `nice_ticks`.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Ticks closer to zero than this are snapped to exactly 0.0.
const ZERO_SNAP: f64 = 1e-12;

/// Step multiples a tick step is chosen from, in tie-break order.
const STEP_MULTIPLES: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Min/max of the finite values, padded by 10% of the span on both ends.
///
/// A constant series is expanded by one unit on each side before padding;
/// no finite values at all yield the fixed `(0.0, 1.0)` fallback so a
/// chart with entirely missing data still renders an axis.
pub fn compute_domain<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.into_iter().flatten() {
        if v.is_finite() {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        min -= 1.0;
        max += 1.0;
    }
    let pad = (max - min) * 0.1;
    (min - pad, max + pad)
}

/// Evenly spaced "nice" ticks bounding `[min, max]`, targeting `desired`
/// tick values.
///
/// The step is a candidate from `{1, 2, 2.5, 5} x 10^floor(log10(span /
/// desired))`, chosen so the resulting count `ceil(max/c) - floor(min/c) +
/// 1` is closest to `desired`; at equal distance the earlier multiple
/// wins. Ticks are integer multiples of the step so repeated addition
/// cannot drift, and near-zero values are snapped to exactly 0.0 to avoid
/// labels like `-0.0000000001`.
pub fn nice_ticks(min: f64, max: f64, desired: usize) -> Vec<f64> {
    let (mut lo, mut hi) = (min, max);
    if !lo.is_finite() {
        lo = 0.0;
    }
    if !hi.is_finite() {
        hi = lo;
    }
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    if lo == hi {
        let d = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        lo -= d;
        hi += d;
    }

    let desired = desired.max(1);
    let base = 10f64.powf(((hi - lo) / desired as f64).log10().floor());
    let mut step = base;
    let mut best_gap = f64::INFINITY;
    for mult in STEP_MULTIPLES {
        let cand = mult * base;
        let count = (hi / cand).ceil() - (lo / cand).floor() + 1.0;
        let gap = (count - desired as f64).abs();
        if gap < best_gap {
            best_gap = gap;
            step = cand;
        }
    }

    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    // Guard the i64 casts; a span vanishingly small next to the magnitude
    // of the endpoints can push the multiples out of integer range.
    if !first.is_finite() || !last.is_finite() || first.abs() > 1e15 || last.abs() > 1e15 {
        return vec![lo, hi];
    }
    let ticks: Vec<f64> = ((first as i64)..=(last as i64))
        .map(|i| {
            let t = i as f64 * step;
            if t.abs() < ZERO_SNAP {
                0.0
            } else {
                t
            }
        })
        .collect();
    if ticks.is_empty() {
        return vec![lo, hi];
    }
    ticks
}
