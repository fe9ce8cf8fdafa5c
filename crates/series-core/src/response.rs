// File: crates/series-core/src/response.rs
// Summary: serde model for the data-source JSON (dates + parallel arrays).

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::align::date_key;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response has no `dates` field")]
    MissingDates,
}

/// One parsed fetch response: a `dates` axis plus any number of parallel
/// arrays whose field names vary by endpoint (`volume`, `ema7`, `roc21`,
/// arbitrary signal names, ...).
///
/// The extra fields stay as raw JSON and are read leniently on demand;
/// validating them exhaustively is not this layer's concern.
#[derive(Clone, Debug, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    dates: Vec<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Parse a response body. The only hard requirement is a non-empty `dates`
/// field; everything else degrades to empty/missing series.
pub fn parse_metrics(body: &str) -> Result<MetricsResponse, ResponseError> {
    let resp: MetricsResponse = serde_json::from_str(body)?;
    if resp.dates.is_empty() {
        return Err(ResponseError::MissingDates);
    }
    Ok(resp)
}

impl MetricsResponse {
    /// Number of entries on the date axis.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The date axis truncated to date-only keys. Keys that do not parse
    /// as `YYYY-MM-DD` are passed through untouched (and noted at debug
    /// level); downstream joins are on the string itself.
    pub fn date_keys(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| {
                let key = date_key(d);
                if chrono::NaiveDate::parse_from_str(key, "%Y-%m-%d").is_err() {
                    log::debug!("non-ISO date key passed through: {key:?}");
                }
                key.to_string()
            })
            .collect()
    }

    /// Names of every parallel array in the response (everything except
    /// `dates`), sorted. Signal endpoints key their arrays by arbitrary
    /// signal names, so callers enumerate rather than assume.
    pub fn series_names(&self) -> Vec<&str> {
        self.extra.keys().map(String::as_str).collect()
    }

    pub fn has_series(&self, name: &str) -> bool {
        self.extra.contains_key(name)
    }

    /// Lenient numeric read of a parallel array. An absent field reads as
    /// empty; entries that are neither numbers nor numeric strings read as
    /// missing.
    pub fn numeric_series(&self, name: &str) -> Vec<Option<f64>> {
        match self.extra.get(name) {
            Some(Value::Array(items)) => items.iter().map(coerce_number).collect(),
            _ => Vec::new(),
        }
    }

    /// Boolean read of a parallel array, for signal endpoints. Anything
    /// that is not a JSON boolean reads as missing.
    pub fn bool_series(&self, name: &str) -> Vec<Option<bool>> {
        match self.extra.get(name) {
            Some(Value::Array(items)) => items.iter().map(Value::as_bool).collect(),
            _ => Vec::new(),
        }
    }
}

fn coerce_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
