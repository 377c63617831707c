//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `RgError` as one variant.

use thiserror::Error;

/// Errors shared by every `rg-*` crate.
#[derive(Debug, Error)]
pub enum RgError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rg-core`.
pub type RgResult<T> = Result<T, RgError>;
