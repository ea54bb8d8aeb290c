//! Database error types for votigo-db.

use thiserror::Error;
use votigo_core::enums::CategoryStatus;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// SQLite rejected a write (foreign key, unique, or check constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A status-guarded write found the category in another status.
    #[error("Category is {0}")]
    StatusConflict(CategoryStatus),

    /// The category has no options, so it cannot be opened.
    #[error("Category has no options")]
    NoOptions,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Classify a libSQL error raised by a write, separating constraint
    /// failures from everything else.
    #[must_use]
    pub fn from_write(err: libsql::Error) -> Self {
        let message = err.to_string();
        if message.contains("constraint failed") {
            Self::Constraint(message)
        } else {
            Self::LibSql(err)
        }
    }
}
