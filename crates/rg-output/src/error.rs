//! Error types for rg-output.

use thiserror::Error;

/// Errors that can occur when writing or reading a map file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed but its adjacency data is inconsistent.
    #[error("invalid map: {0}")]
    InvalidMap(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
