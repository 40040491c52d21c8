//! Error types shared by every dashboard crate.

use thiserror::Error;

/// A fetch-or-render failure for one chart slot or the summary subtitle.
///
/// Every variant is terminal for the refresh attempt that produced it only;
/// the orchestrator logs it and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashError {
    #[error("request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },

    #[error("{endpoint} returned HTTP {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("{endpoint} did not return JSON: {reason}")]
    Body { endpoint: String, reason: String },

    #[error("response is missing field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` has an unexpected shape: {reason}")]
    Shape { field: String, reason: String },

    #[error("`{labels_field}` has {labels} entries but `{values_field}` has {values}")]
    LengthMismatch {
        labels_field: String,
        labels: usize,
        values_field: String,
        values: usize,
    },

    #[error("canvas `{0}` not found")]
    MissingCanvas(String),

    #[error("could not draw chart on `{canvas}`: {reason}")]
    Chart { canvas: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DashError>;

/// Returned when a metric or slot name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}
