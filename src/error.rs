//! Error types for fixture loading.

use thiserror::Error;

/// Errors that can occur while reading fit fixtures.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed fixture json: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixture parsed but a value is unusable, e.g. a negative tolerance.
    #[error("invalid fixture {index}: {reason}")]
    Shape { index: usize, reason: String },
}
