// File: crates/demo/src/main.rs
// Summary: Demo loads a metrics JSON fixture and walks the full pipeline:
// align, combine, preset zooms, domains/ticks, and a signal overlay.

use anyhow::{Context, Result};
use series_core::{
    align, combine, format_short, mark_signals, parse_metrics, ChartSession, MetricsResponse,
    PresetOutcome, Row, DEFAULT_TICK_COUNT,
};

const METRIC_NAMES: [&str; 4] = ["volume", "marketCap", "tokenTurnover", "price"];

fn main() -> Result<()> {
    env_logger::init();

    // Accept a fixture path from the CLI or fall back to the bundled sample.
    let body = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read metrics fixture '{path}'"))?
        }
        None => {
            println!("Using bundled sample fixture");
            include_str!("../data/sample_metrics.json").to_string()
        }
    };

    let resp = parse_metrics(&body).context("failed to parse metrics response")?;
    println!("Loaded {} dates, series: {}", resp.len(), resp.series_names().join(", "));

    let rows = combine_metrics(&resp);

    // A session per chart instance; backing window of 60 points.
    let mut session = ChartSession::new(60);
    let token = session.begin_fetch();
    session.complete_fetch(token, rows);

    print_frame("full window", &session, &["volume"]);

    // Preset small enough to slice the data we already hold.
    match session.select_preset(7) {
        PresetOutcome::Sliced => println!("\n7d preset sliced in place"),
        PresetOutcome::NeedsFetch { count } => println!("\n7d preset wants refetch ({count})"),
    }
    print_frame("7d window", &session, &["volume"]);

    // Preset beyond the backing window: the fetch must be re-issued with
    // the larger count; here the fixture is all the data there is, so the
    // "refetch" just replays it.
    if let PresetOutcome::NeedsFetch { count } = session.select_preset(90) {
        println!("\n90d preset exceeds backing window; refetching with count={count}");
        let token = session.begin_fetch();
        session.complete_fetch(token, combine_metrics(&resp));
    }
    print_frame("90d window", &session, &["volume"]);

    overlay_signals(&resp)?;

    Ok(())
}

/// Align every metric the endpoint carries and join them on the date axis.
fn combine_metrics(resp: &MetricsResponse) -> Vec<Row> {
    let dates = resp.date_keys();
    let aligned: Vec<(&str, Vec<_>)> = METRIC_NAMES
        .iter()
        .map(|name| {
            let values = resp.numeric_series(name);
            (*name, align(&dates, Some(&values)))
        })
        .collect();
    let series: Vec<(&str, &[_])> = aligned.iter().map(|(n, pts)| (*n, pts.as_slice())).collect();
    combine(&series)
}

fn print_frame(label: &str, session: &ChartSession, names: &[&str]) {
    let frame = session.frame(names, DEFAULT_TICK_COUNT);
    let range = session.visible_range();
    println!("\n{label}: rows {}..={} ({} visible)", range.start, range.end, frame.rows.len());
    if let (Some(first), Some(last)) = (frame.rows.first(), frame.rows.last()) {
        println!("  span {} .. {}", first.x, last.x);
    }
    println!(
        "  domain [{}, {}]",
        format_short(frame.domain.0),
        format_short(frame.domain.1)
    );
    let labels: Vec<String> = frame.ticks.iter().map(|t| format_short(*t)).collect();
    println!("  ticks  {}", labels.join(", "));
}

/// Overlay the signals fixture onto the volume series and list firings.
fn overlay_signals(coins: &MetricsResponse) -> Result<()> {
    let body = include_str!("../data/sample_signals.json");
    let sig = parse_metrics(body).context("failed to parse signals response")?;

    let dates = coins.date_keys();
    let volume = coins.numeric_series("volume");
    let base = align(&dates, Some(&volume));

    let flags: Vec<(&str, Vec<_>)> = sig
        .series_names()
        .into_iter()
        .map(|name| (name, sig.bool_series(name)))
        .collect();
    let named: Vec<(&str, &[_])> = flags.iter().map(|(n, f)| (*n, f.as_slice())).collect();

    let marked = mark_signals(&base, &named);
    println!("\nsignals:");
    for row in marked.iter().filter(|r| r.has_signal()) {
        let value = row.y.map(format_short).unwrap_or_else(|| "-".into());
        println!("  {}  volume={value:>6}  fired: {}", row.x, row.fired.join(", "));
    }
    Ok(())
}
