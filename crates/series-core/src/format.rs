// File: crates/series-core/src/format.rs
// Summary: Compact axis-label formatting with K/M/B/T suffixes.

/// Unit thresholds checked largest-first.
const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Render an axis label compactly: `1_500_000 -> "1.5M"`, `-2000 -> "-2K"`,
/// `999 -> "999"`, `0 -> "0"`.
///
/// The scaled value gets 2 decimals below 10, 1 below 100, none otherwise;
/// trailing zeros and a trailing decimal point are stripped. The sign is
/// taken once from the original value. Non-finite input falls back to the
/// standard rendering.
pub fn format_short(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    let (scaled, suffix) = UNITS
        .iter()
        .find(|(unit, _)| abs >= *unit)
        .map(|(unit, suffix)| (abs / unit, *suffix))
        .unwrap_or((abs, ""));
    let decimals: usize = if scaled < 10.0 {
        2
    } else if scaled < 100.0 {
        1
    } else {
        0
    };
    let mut body = format!("{scaled:.decimals$}");
    if body.contains('.') {
        body = body.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{body}{suffix}")
}
