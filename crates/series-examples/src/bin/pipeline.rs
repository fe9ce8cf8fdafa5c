// File: crates/series-examples/src/bin/pipeline.rs
// Summary: Minimal example running the pipeline on a small inline series.

use series_core::{align, combine, format_short, ChartSession, DEFAULT_TICK_COUNT};

fn main() {
    // A week of raw data; the EMA warm-up leaves it three points short.
    let dates: Vec<String> = (1..=7).map(|d| format!("2024-01-{d:02}")).collect();
    let volume = [
        Some(1_200_000.0),
        Some(1_500_000.0),
        Some(900_000.0),
        Some(2_100_000.0),
        Some(1_800_000.0),
        Some(2_400_000.0),
        Some(2_000_000.0),
    ];
    let ema = [Some(1_400_000.0), Some(1_700_000.0), Some(1_900_000.0), Some(2_050_000.0)];

    let volume_pts = align(&dates, Some(&volume));
    let ema_pts = align(&dates, Some(&ema));
    let rows = combine(&[("volume", &volume_pts), ("ema", &ema_pts)]);

    let mut session = ChartSession::new(5);
    let token = session.begin_fetch();
    session.complete_fetch(token, rows);

    let frame = session.frame(&["volume", "ema"], DEFAULT_TICK_COUNT);
    println!("visible rows: {}", frame.rows.len());
    for row in &frame.rows {
        let vol = row.value("volume").map(format_short).unwrap_or_else(|| "-".into());
        let ema = row.value("ema").map(format_short).unwrap_or_else(|| "-".into());
        println!("  {}  volume={vol:>6}  ema={ema:>6}", row.x);
    }
    println!("domain: [{}, {}]", format_short(frame.domain.0), format_short(frame.domain.1));
    let labels: Vec<String> = frame.ticks.iter().map(|t| format_short(*t)).collect();
    println!("ticks:  {}", labels.join(", "));
}
