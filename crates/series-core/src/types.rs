// File: crates/series-core/src/types.rs
// Summary: Shared point/row records keyed by ISO date strings.

use std::collections::BTreeMap;

/// One observation on the date axis. `y = None` is an explicit missing
/// value; non-finite numbers are normalized to `None` at construction so
/// they never reach a min/max scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: String,
    pub y: Option<f64>,
}

impl Point {
    pub fn new(x: impl Into<String>, y: Option<f64>) -> Self {
        Self { x: x.into(), y: y.filter(|v| v.is_finite()) }
    }
}

/// One record per distinct date carrying every series' value at that date.
///
/// A name absent from the cell map means that series has no observation at
/// `x` at all; a name present with `None` is an aligned missing value. The
/// distinction matters for outer-join semantics: absent is never rendered
/// as zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub x: String,
    cells: BTreeMap<String, Option<f64>>,
}

impl Row {
    pub fn new(x: impl Into<String>) -> Self {
        Self { x: x.into(), cells: BTreeMap::new() }
    }

    /// Set the cell for `name`, normalizing non-finite values to `None`.
    pub fn set(&mut self, name: &str, y: Option<f64>) {
        self.cells.insert(name.to_string(), y.filter(|v| v.is_finite()));
    }

    /// Cell for `name`: outer `None` when the series is absent at this date.
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.cells.get(name).copied()
    }

    /// Flattened cell value (absent and missing both read as `None`).
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).flatten()
    }

    /// Names present at this date, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
