//! # votigo-db
//!
//! libSQL storage access for Votigo.
//!
//! Holds the relational state of an event: categories, their options, one
//! vote per (category, nickname), and each vote's selections. No business
//! rules live here beyond what the schema enforces; lifecycle, ballot
//! validation, and tally ordering policy belong to `votigo-engine`.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local-only mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Central database handle for all Votigo state.
///
/// Owns one libSQL connection plus a reader/writer gate. Every repo method
/// takes the read side for queries and the write side for mutations, so a
/// multi-statement write (ballot replace) is never observed half-applied.
pub struct VoteDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    gate: RwLock<()>,
}

impl VoteDb {
    /// Open a local database at the given path, or `":memory:"` for tests.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let vote_db = Self {
            db,
            conn,
            gate: RwLock::new(()),
        };
        vote_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(vote_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    ///
    /// Bypasses the gate; callers outside this crate use it for diagnostics
    /// and tests only.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, ()> {
        self.gate.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, ()> {
        self.gate.write().await
    }
}
