// File: crates/series-core/tests/window.rs
// Purpose: Validate zoom-window resolution, presets, and staleness handling.

use series_core::{PresetOutcome, RangeSelector, VisibleRange, PRESET_DAYS};

#[test]
fn resolve_defaults_to_last_requested_count_points() {
    let sel = RangeSelector::new(60);
    assert_eq!(sel.resolve(100), VisibleRange::new(40, 99));
}

#[test]
fn resolve_takes_all_points_when_fewer_exist() {
    let sel = RangeSelector::new(60);
    assert_eq!(sel.resolve(30), VisibleRange::new(0, 29));
}

#[test]
fn resolve_empty_dataset_is_zero_range() {
    let sel = RangeSelector::new(60);
    // Callers treat n = 0 as nothing to slice; the range itself is {0, 0}.
    assert_eq!(sel.resolve(0), VisibleRange::new(0, 0));
}

#[test]
fn resolve_returns_valid_explicit_range_unchanged() {
    let mut sel = RangeSelector::new(60);
    sel.set_range(VisibleRange::new(10, 20));
    assert_eq!(sel.resolve(100), VisibleRange::new(10, 20));
}

#[test]
fn resolve_ignores_stale_explicit_range() {
    let mut sel = RangeSelector::new(60);
    sel.set_range(VisibleRange::new(90, 99)); // computed for n = 100

    let resolved = sel.resolve(50);

    // Must not reference index 99; falls back to the default window for
    // n = 50, not a clamped variant of the stale one.
    assert_eq!(resolved, VisibleRange::new(0, 49));
}

#[test]
fn resolve_ignores_inverted_explicit_range() {
    let mut sel = RangeSelector::new(10);
    sel.set_range(VisibleRange::new(20, 5));
    assert_eq!(sel.resolve(100), VisibleRange::new(90, 99));
}

#[test]
fn discard_stale_drops_invalidated_range_only() {
    let mut sel = RangeSelector::new(60);
    sel.set_range(VisibleRange::new(10, 20));

    sel.discard_stale(100);
    assert_eq!(sel.resolve(100), VisibleRange::new(10, 20)); // still valid

    sel.discard_stale(15);
    assert_eq!(sel.resolve(100), VisibleRange::new(40, 99)); // dropped
}

#[test]
fn preset_within_backing_window_slices_in_place() {
    let mut sel = RangeSelector::new(60);

    let outcome = sel.select_preset(14, 100);

    assert_eq!(outcome, PresetOutcome::Sliced);
    assert_eq!(sel.requested_count(), 60);
    assert_eq!(sel.resolve(100), VisibleRange::new(86, 99));
}

#[test]
fn preset_beyond_backing_window_requests_refetch() {
    let mut sel = RangeSelector::new(60);

    let outcome = sel.select_preset(180, 100);

    assert_eq!(outcome, PresetOutcome::NeedsFetch { count: 180 });
    assert_eq!(sel.requested_count(), 180);
    // Provisional window: the last 180 of the *current* 100 points.
    assert_eq!(sel.resolve(100), VisibleRange::new(0, 99));
}

#[test]
fn preset_on_empty_dataset_sets_no_window() {
    let mut sel = RangeSelector::new(60);
    let outcome = sel.select_preset(14, 0);
    assert_eq!(outcome, PresetOutcome::Sliced);
    assert_eq!(sel.resolve(0), VisibleRange::new(0, 0));
}

#[test]
fn requested_count_has_a_floor_of_one() {
    let sel = RangeSelector::new(0);
    assert_eq!(sel.requested_count(), 1);
    assert_eq!(sel.resolve(10), VisibleRange::new(9, 9));
}

#[test]
fn preset_table_is_the_documented_set() {
    assert_eq!(PRESET_DAYS, [7, 14, 30, 60, 90, 180]);
}
