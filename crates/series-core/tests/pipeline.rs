// File: crates/series-core/tests/pipeline.rs
// Purpose: End-to-end scenario plus chart-session lifecycle behavior.

use series_core::{
    align, combine, parse_metrics, ChartSession, ChartStatus, PresetOutcome, VisibleRange,
    DEFAULT_TICK_COUNT,
};

const EPS: f64 = 1e-9;

const BODY: &str = r#"{
    "dates": ["2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z", "2024-01-03T00:00:00Z"],
    "volume": [10.0, 20.0, 30.0]
}"#;

#[test]
fn fetch_to_frame_end_to_end() {
    let resp = parse_metrics(BODY).unwrap();
    let dates = resp.date_keys();
    let volume = resp.numeric_series("volume");
    let points = align(&dates, Some(&volume));
    let rows = combine(&[("volume", &points)]);

    assert_eq!(rows.len(), 3);
    for (row, (x, y)) in rows.iter().zip([
        ("2024-01-01", 10.0),
        ("2024-01-02", 20.0),
        ("2024-01-03", 30.0),
    ]) {
        assert_eq!(row.x, x);
        assert_eq!(row.value("volume"), Some(y));
    }

    let mut session = ChartSession::new(2);
    let token = session.begin_fetch();
    assert!(session.complete_fetch(token, rows));
    assert_eq!(session.status(), &ChartStatus::Ready);

    assert_eq!(session.visible_range(), VisibleRange::new(1, 2));

    let frame = session.frame(&["volume"], DEFAULT_TICK_COUNT);
    assert_eq!(frame.rows.len(), 2); // days 2-3 only
    assert_eq!(frame.rows[0].x, "2024-01-02");
    // computeDomain([20, 30]) -> span 10, padded by 1 each side.
    assert!((frame.domain.0 - 19.0).abs() < EPS);
    assert!((frame.domain.1 - 31.0).abs() < EPS);
    assert!(!frame.ticks.is_empty());
    assert!(frame.ticks.iter().all(|t| (19.0 - EPS..=31.0 + EPS).contains(t)));
}

#[test]
fn stale_fetch_results_are_discarded() {
    let resp = parse_metrics(BODY).unwrap();
    let dates = resp.date_keys();
    let points = align(&dates, Some(&resp.numeric_series("volume")));
    let rows = combine(&[("volume", &points)]);

    let mut session = ChartSession::new(60);
    let stale = session.begin_fetch();
    let current = session.begin_fetch(); // a newer selection superseded it

    assert!(!session.complete_fetch(stale, rows.clone()));
    assert!(session.rows().is_empty());
    assert_eq!(session.status(), &ChartStatus::Loading);

    assert!(session.complete_fetch(current, rows));
    assert_eq!(session.rows().len(), 3);
}

#[test]
fn stale_failure_does_not_clobber_status() {
    let mut session = ChartSession::new(60);
    let stale = session.begin_fetch();
    let current = session.begin_fetch();

    assert!(!session.fail_fetch(stale, "connection reset"));
    assert_eq!(session.status(), &ChartStatus::Loading);

    assert!(session.fail_fetch(current, "HTTP 500"));
    assert_eq!(session.status(), &ChartStatus::Failed("HTTP 500".into()));
}

#[test]
fn pending_preset_finalizes_after_larger_fetch() {
    let mut session = ChartSession::new(60);
    let token = session.begin_fetch();
    session.complete_fetch(token, rows_of(30));

    // 90 days exceeds the 60-point backing window: provisional range now,
    // refetch demanded.
    assert_eq!(session.select_preset(90), PresetOutcome::NeedsFetch { count: 90 });
    assert_eq!(session.visible_range(), VisibleRange::new(0, 29));

    let token = session.begin_fetch();
    session.complete_fetch(token, rows_of(90));

    // The preset was re-applied against the new length.
    assert_eq!(session.visible_range(), VisibleRange::new(0, 89));
    assert_eq!(session.requested_count(), 90);
}

#[test]
fn shrinking_refetch_invalidates_explicit_window() {
    let mut session = ChartSession::new(60);
    let token = session.begin_fetch();
    session.complete_fetch(token, rows_of(100));

    assert_eq!(session.select_preset(14), PresetOutcome::Sliced);
    assert_eq!(session.visible_range(), VisibleRange::new(86, 99));

    let token = session.begin_fetch();
    session.complete_fetch(token, rows_of(50));

    // The 86..=99 window died with the old dataset; default window applies.
    assert_eq!(session.visible_range(), VisibleRange::new(0, 49));
}

#[test]
fn empty_session_frames_render_an_axis() {
    let session = ChartSession::new(60);
    let frame = session.frame(&["volume"], DEFAULT_TICK_COUNT);
    assert!(frame.rows.is_empty());
    assert_eq!(frame.domain, (0.0, 1.0));
    assert!(!frame.ticks.is_empty());
}

fn rows_of(n: usize) -> Vec<series_core::Row> {
    let dates: Vec<String> = (0..n).map(|i| format!("2024-{:02}-{:02}", 1 + i / 28, 1 + i % 28)).collect();
    let values: Vec<Option<f64>> = (0..n).map(|i| Some(i as f64)).collect();
    let points = align(&dates, Some(&values));
    combine(&[("volume", &points)])
}
