// File: crates/series-core/src/combine.rs
// Summary: Outer-join of named point series into date-keyed rows.

use std::collections::BTreeMap;

use crate::types::{Point, Row};
use crate::window::VisibleRange;

/// Merge named series into one row per distinct date, sorted ascending by
/// date key (lexicographic order, which is chronological for ISO dates).
///
/// Outer-join semantics: a date present in only one series still yields a
/// row, with the other names absent for that row. The row map is keyed by
/// the date string, so any iteration order of the input produces the same
/// output; only a repeated series name can collide, and there the last
/// write wins.
pub fn combine(series: &[(&str, &[Point])]) -> Vec<Row> {
    let mut by_x: BTreeMap<String, Row> = BTreeMap::new();
    for (name, points) in series {
        for p in *points {
            by_x
                .entry(p.x.clone())
                .or_insert_with(|| Row::new(p.x.clone()))
                .set(name, p.y);
        }
    }
    by_x.into_values().collect()
}

/// Cell values of the named series inside `range`, in row order.
///
/// Indices are clamped to the row count for the scan itself; the range
/// invariant proper (stale windows are discarded, not clamped) is enforced
/// by the selector before a range ever reaches a renderer.
pub fn visible_values(rows: &[Row], names: &[&str], range: VisibleRange) -> Vec<Option<f64>> {
    if rows.is_empty() {
        return Vec::new();
    }
    let end = range.end.min(rows.len() - 1);
    let start = range.start.min(end);
    rows[start..=end]
        .iter()
        .flat_map(|row| names.iter().map(move |name| row.value(name)))
        .collect()
}
