// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the histogram, option builder and renderer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Caller passed data the operation cannot work with (empty series, zero bins).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown chart kind: {0:?}")]
    UnknownChartKind(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
