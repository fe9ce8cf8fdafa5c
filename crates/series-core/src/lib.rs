// File: crates/series-core/src/lib.rs
// Summary: Core library entry point; exports the series pipeline API.

pub mod types;
pub mod align;
pub mod combine;
pub mod window;
pub mod domain;
pub mod format;
pub mod signals;
pub mod response;
pub mod chart;

pub use types::{Point, Row};
pub use align::{align, align_direct, date_key};
pub use combine::{combine, visible_values};
pub use window::{PresetOutcome, RangeSelector, VisibleRange, PRESET_DAYS};
pub use domain::{compute_domain, nice_ticks, DEFAULT_TICK_COUNT};
pub use format::format_short;
pub use signals::{mark_signals, SignalRow};
pub use response::{parse_metrics, MetricsResponse, ResponseError};
pub use chart::{ChartFrame, ChartSession, ChartStatus, FetchToken};
