// File: crates/series-core/src/window.rs
// Summary: Zoom window state; preset periods resolved to index ranges.

/// Preset lookback periods, in days, offered by the zoom control.
pub const PRESET_DAYS: [usize; 6] = [7, 14, 30, 60, 90, 180];

/// Inclusive index slice of the chronological sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Last `count` indices of a dataset of length `n`.
fn tail_range(count: usize, n: usize) -> VisibleRange {
    let take = count.min(n);
    VisibleRange::new(n.saturating_sub(take), n.saturating_sub(1))
}

/// Result of a preset selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetOutcome {
    /// Existing data covers the period; the window was sliced in place.
    Sliced,
    /// The backing fetch must be re-issued with this larger count.
    NeedsFetch { count: usize },
}

/// Zoom state: a requested lookback count plus an optional explicit range.
///
/// The two fields couple subtly (a preset may either slice existing data or
/// demand a larger backing fetch), so resolution lives in one place and is
/// the only way a range reaches a caller.
#[derive(Clone, Copy, Debug)]
pub struct RangeSelector {
    requested_count: usize,
    explicit: Option<VisibleRange>,
}

impl RangeSelector {
    pub fn new(requested_count: usize) -> Self {
        Self { requested_count: requested_count.max(1), explicit: None }
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    /// Pin an explicit window (e.g. from a drag selection).
    pub fn set_range(&mut self, range: VisibleRange) {
        self.explicit = Some(range);
    }

    /// Drop any explicit window and fall back to the default lookback.
    pub fn clear_range(&mut self) {
        self.explicit = None;
    }

    /// Resolve the stored selection against the current dataset length.
    ///
    /// The explicit range is returned unchanged iff `start <= end < n`;
    /// anything stale falls back to the default window (the last
    /// `requested_count` points, or all points if fewer exist). Stale
    /// ranges are never clamped; a truncated window computed for a
    /// differently-sized dataset must not be applied silently. `n = 0`
    /// resolves to `{0, 0}`; callers treat an empty dataset as nothing to
    /// slice rather than indexing into it.
    pub fn resolve(&self, n: usize) -> VisibleRange {
        if let Some(r) = self.explicit {
            if r.start <= r.end && r.end < n {
                return r;
            }
        }
        tail_range(self.requested_count, n)
    }

    /// Discard a stored explicit range invalidated by a dataset of length
    /// `n`. Called whenever the backing data length changes.
    pub fn discard_stale(&mut self, n: usize) {
        if let Some(r) = self.explicit {
            if r.start > r.end || r.end >= n {
                log::warn!(
                    "discarding stale window {}..={} for dataset of length {n}",
                    r.start,
                    r.end
                );
                self.explicit = None;
            }
        }
    }

    /// Zoom to the last `days` points of a dataset of length `n`.
    ///
    /// When `days` exceeds the requested count the backing fetch must be
    /// re-issued with the larger count; the window set here is provisional
    /// (the last `days` of the *current* data) until that fetch returns.
    pub fn select_preset(&mut self, days: usize, n: usize) -> PresetOutcome {
        let days = days.max(1);
        self.explicit = if n == 0 { None } else { Some(tail_range(days, n)) };
        if days > self.requested_count {
            self.requested_count = days;
            log::debug!("preset {days}d exceeds backing window; refetch required");
            PresetOutcome::NeedsFetch { count: days }
        } else {
            PresetOutcome::Sliced
        }
    }
}
