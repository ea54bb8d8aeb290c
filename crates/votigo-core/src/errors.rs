//! Cross-cutting error types for Votigo.
//!
//! Domain-specific errors (`DatabaseError`, `EngineError`) are defined in
//! their respective crates. `CoreError` covers failures raised while
//! interpreting domain values, independent of storage.

use thiserror::Error;

/// Errors that can be raised by any Votigo crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("{0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
