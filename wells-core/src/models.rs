//! Typed views of the backend's JSON responses.
//!
//! Grouped endpoints return parallel arrays, e.g.
//! `{"Year": [2020, 2021], "avg_days": [12.3, 9.8]}`. The field names depend
//! on the slot and metric, so parsing goes through [`GroupedAverages::from_json`]
//! rather than a fixed `Deserialize` struct.

use crate::error::{DashError, Result};
use crate::metric::Metric;
use crate::slot::Slot;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Shown in place of a `null` category.
pub const MISSING_LABEL: &str = "Unknown";

/// A category label. Years arrive as integers, the other groupings as text,
/// and groups with no matching dimension row come back as `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Number(f64),
    Text(String),
    Missing,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(n) => write!(f, "{n}"),
            Label::Number(n) => write!(f, "{n}"),
            Label::Text(s) => f.write_str(s),
            Label::Missing => f.write_str(MISSING_LABEL),
        }
    }
}

/// Numbers stay numbers; a missing category becomes [`MISSING_LABEL`].
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Label::Integer(n) => serializer.serialize_i64(*n),
            Label::Number(n) => serializer.serialize_f64(*n),
            Label::Text(s) => serializer.serialize_str(s),
            Label::Missing => serializer.serialize_str(MISSING_LABEL),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Integer(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

/// Labels and the matching per-group averages for one slot and metric.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedAverages {
    pub labels: Vec<Label>,
    /// `None` where the backend averaged over no rows.
    pub values: Vec<Option<f64>>,
}

impl GroupedAverages {
    /// Pull the slot's label field and the metric's series field out of a
    /// grouped response. Both must be arrays of equal length.
    pub fn from_json(body: &Value, slot: Slot, metric: Metric) -> Result<Self> {
        let labels: Vec<Label> = field(body, slot.label_field())?;
        let values: Vec<Option<f64>> = field(body, metric.series_field())?;
        if labels.len() != values.len() {
            return Err(DashError::LengthMismatch {
                labels_field: slot.label_field().to_string(),
                labels: labels.len(),
                values_field: metric.series_field().to_string(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Aggregates from `/api/summary_stats`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(deserialize_with = "whole_count")]
    pub total_wells: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_days: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_cost: f64,
}

impl SummaryStats {
    pub fn from_json(body: &Value) -> Result<Self> {
        for key in ["total_wells", "avg_days", "avg_cost"] {
            if body.get(key).is_none() {
                return Err(DashError::MissingField {
                    field: key.to_string(),
                });
            }
        }
        serde_json::from_value(body.clone()).map_err(|e| DashError::Shape {
            field: "summary_stats".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn average(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Days => self.avg_days,
            Metric::Cost => self.avg_cost,
        }
    }
}

/// The backend sums and averages an empty table to SQL NULL.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// SQLite sums REAL columns to floats, so `150.0` is as good as `150`.
fn whole_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Whole(u64),
        Float(f64),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Count::Whole(n)) => Ok(n),
        Some(Count::Float(f)) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        Some(Count::Float(f)) => Err(de::Error::custom(format!(
            "expected a whole, non-negative count, got {f}"
        ))),
    }
}

fn field<T: DeserializeOwned>(body: &Value, name: &str) -> Result<T> {
    let value = body.get(name).ok_or_else(|| DashError::MissingField {
        field: name.to_string(),
    })?;
    T::deserialize(value).map_err(|e| DashError::Shape {
        field: name.to_string(),
        reason: e.to_string(),
    })
}

/// Turn an HTTP status and body into JSON, or the matching error.
///
/// Error responses from the backend look like `{"error": "Not found"}`; the
/// message is lifted into [`DashError::Status`] when present.
pub fn decode_response(endpoint: &str, status: u16, body: &str) -> Result<Value> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| body.trim().chars().take(200).collect());
        return Err(DashError::Status {
            endpoint: endpoint.to_string(),
            status,
            message,
        });
    }
    serde_json::from_str(body).map_err(|e| DashError::Body {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
