//! Error types for docbridge.
//!
//! Documentation content never produces an error: unknown references and
//! malformed tags degrade in place. What remains are failures of the
//! surroundings, such as the output sink or an API description that cannot
//! be decoded.

use thiserror::Error;

/// Errors surfaced to callers of the translator and loaders.
#[derive(Debug, Error)]
pub enum DocError {
    /// Writing translated lines failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The API description is not valid JSON of the expected shape.
    #[cfg(feature = "interchange")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type DocResult<T> = Result<T, DocError>;
