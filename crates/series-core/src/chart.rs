// File: crates/series-core/src/chart.rs
// Summary: Per-chart session state; fetch lifecycle, zoom, frame assembly.

use crate::combine::visible_values;
use crate::domain::{compute_domain, nice_ticks};
use crate::types::Row;
use crate::window::{PresetOutcome, RangeSelector, VisibleRange};

/// Opaque handle tying a fetch completion back to the request that issued
/// it. Tokens from superseded requests are rejected on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Renderer-facing bundle for one chart: the visible rows, the padded Y
/// domain over the named series, and the tick values for that domain.
#[derive(Clone, Debug)]
pub struct ChartFrame {
    pub rows: Vec<Row>,
    pub domain: (f64, f64),
    pub ticks: Vec<f64>,
}

/// Owned state for one chart instance.
///
/// Holds the small pieces the pipeline cannot derive from a fetch response
/// alone: the zoom selection, the load status, and the generation counter
/// that makes "last request to complete for the current selection wins"
/// hold without explicit cancellation. Everything else is recomputed from
/// the installed rows on demand.
#[derive(Clone, Debug)]
pub struct ChartSession {
    selector: RangeSelector,
    pending_preset: Option<usize>,
    generation: u64,
    status: ChartStatus,
    rows: Vec<Row>,
}

impl ChartSession {
    pub fn new(requested_count: usize) -> Self {
        Self {
            selector: RangeSelector::new(requested_count),
            pending_preset: None,
            generation: 0,
            status: ChartStatus::Loading,
            rows: Vec::new(),
        }
    }

    pub fn status(&self) -> &ChartStatus {
        &self.status
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn requested_count(&self) -> usize {
        self.selector.requested_count()
    }

    /// Start a fetch for the current selection. Any fetch still in flight
    /// is superseded: only the newest token is accepted on completion.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        self.status = ChartStatus::Loading;
        FetchToken(self.generation)
    }

    /// Install fetched rows. Returns `false` (and changes nothing) when
    /// the token belongs to a superseded request.
    pub fn complete_fetch(&mut self, token: FetchToken, rows: Vec<Row>) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.rows = rows;
        // The dataset length changed; a window stored for the old length
        // must not survive into this one.
        self.selector.discard_stale(self.rows.len());
        if let Some(days) = self.pending_preset.take() {
            self.selector.select_preset(days, self.rows.len());
        }
        self.status = ChartStatus::Ready;
        true
    }

    /// Record a fetch failure. Stale tokens are ignored the same way as in
    /// `complete_fetch`.
    pub fn fail_fetch(&mut self, token: FetchToken, message: impl Into<String>) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.status = ChartStatus::Failed(message.into());
        true
    }

    fn accepts(&self, token: FetchToken) -> bool {
        if token.0 != self.generation {
            log::debug!(
                "ignoring result of superseded fetch (token {}, current generation {})",
                token.0,
                self.generation
            );
            return false;
        }
        true
    }

    /// Zoom to a preset period. A `NeedsFetch` outcome means the caller
    /// must re-issue the backing fetch with the returned count; the preset
    /// is re-applied against the new data when that fetch lands.
    pub fn select_preset(&mut self, days: usize) -> PresetOutcome {
        let outcome = self.selector.select_preset(days, self.rows.len());
        if let PresetOutcome::NeedsFetch { .. } = outcome {
            self.pending_preset = Some(days);
        }
        outcome
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.selector.resolve(self.rows.len())
    }

    /// Assemble the renderer input for the named series at the current
    /// zoom. An empty session yields an empty frame with the fallback
    /// domain, so a chart with no data still renders an axis.
    pub fn frame(&self, names: &[&str], tick_count: usize) -> ChartFrame {
        if self.rows.is_empty() {
            let domain = compute_domain(std::iter::empty());
            let ticks = nice_ticks(domain.0, domain.1, tick_count);
            return ChartFrame { rows: Vec::new(), domain, ticks };
        }
        let range = self.visible_range();
        let rows = self.rows[range.start..=range.end].to_vec();
        let domain = compute_domain(visible_values(&self.rows, names, range));
        let ticks = nice_ticks(domain.0, domain.1, tick_count);
        ChartFrame { rows, domain, ticks }
    }
}
