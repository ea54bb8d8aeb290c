//! # votigo-engine
//!
//! The voting rules of Votigo, as methods on a thin [`Engine`] over an
//! injected [`VoteDb`]:
//!
//! - [`lifecycle`]: category and option management plus the
//!   `draft → open → closed → archived` state machine.
//! - [`ballot`]: ballot validation per vote type and re-vote by nickname.
//! - [`tally`]: simple and ranked tallies, voter counts, visibility gating.
//!
//! The engine holds no state of its own. Every call reads the latest
//! committed storage state, so one `Engine` can be shared across tasks
//! behind an `Arc`.

pub mod ballot;
pub mod error;
pub mod lifecycle;
pub mod tally;

#[cfg(test)]
mod test_support;

use votigo_db::VoteDb;

use crate::error::EngineError;

pub use ballot::RawBallot;
pub use error::{BallotRejection, TransitionError};
pub use lifecycle::NewCategory;
pub use tally::ResultsView;

/// Entry point for all voting operations.
pub struct Engine {
    db: VoteDb,
}

impl Engine {
    /// Open (or create) a local database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the database cannot be opened.
    pub async fn new_local(path: &str) -> Result<Self, EngineError> {
        let db = VoteDb::open_local(path).await?;
        Ok(Self { db })
    }

    /// Wrap an existing handle.
    #[must_use]
    pub const fn from_db(db: VoteDb) -> Self {
        Self { db }
    }

    /// Access the storage handle.
    #[must_use]
    pub const fn db(&self) -> &VoteDb {
        &self.db
    }
}
