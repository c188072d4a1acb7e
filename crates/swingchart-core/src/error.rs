// File: crates/swingchart-core/src/error.rs
// Summary: Error type for decoding and configuration failures.

use thiserror::Error;

/// Failures surfaced by the core crate.
///
/// Geometry itself never fails: an empty chartable series is reported through
/// [`crate::ComposeOutcome::InsufficientData`], not through this type.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to decode series JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported date format: {0:?}")]
    InvalidDate(String),

    #[error("invalid chart config: {0}")]
    InvalidConfig(&'static str),
}

pub type ChartResult<T> = Result<T, ChartError>;
