//! Error types for trace analysis

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Empty series: no samples for {0}")]
    EmptySeries(&'static str),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Series length mismatch: {signal} has {actual} samples, expected {expected}")]
    LengthMismatch {
        signal: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to render chart: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
