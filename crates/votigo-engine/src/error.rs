//! Engine error taxonomy.
//!
//! Not-found, transition, and validation errors are expected during normal
//! use and carry a message fit for voters. Storage failures are logged at
//! `error` level when they enter this type and are never shown verbatim.

use thiserror::Error;
use votigo_core::enums::{CategoryStatus, LifecycleAction};
use votigo_core::errors::CoreError;
use votigo_db::error::DatabaseError;

/// Generic text shown in place of any storage failure.
pub const GENERIC_FAILURE: &str = "Something went wrong, please try again";

/// A lifecycle action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Cannot {action} a category that is {from}")]
    NotAllowed {
        from: CategoryStatus,
        action: LifecycleAction,
    },

    #[error("Category needs at least one option before it can open")]
    NeedsOptions,
}

/// The rule a ballot broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BallotRejection {
    #[error("Voting is not open for this category")]
    NotOpen,

    #[error("Please enter a nickname")]
    EmptyNickname,

    /// `single` ballot with no choice.
    #[error("Please make a selection")]
    NoSelection,

    /// `single` ballot with more than one choice.
    #[error("Please choose only one option")]
    MultipleChoices,

    /// `approval` or `ranked` ballot with nothing chosen.
    #[error("Please make at least one selection")]
    EmptyBallot,

    #[error("Each choice must be different")]
    DuplicateRankedChoice,

    #[error("You can rank at most {max_rank} choices")]
    RankOutOfRange { max_rank: i64 },

    #[error("Please choose from the listed options")]
    UnknownOption,
}

/// Errors returned by every engine operation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error(transparent)]
    Validation(#[from] BallotRejection),

    /// Malformed admin input, e.g. a blank name.
    #[error(transparent)]
    Input(#[from] CoreError),

    #[error("Storage failure: {0}")]
    Storage(DatabaseError),
}

impl From<DatabaseError> for EngineError {
    fn from(err: DatabaseError) -> Self {
        tracing::error!(error = %err, "storage failure");
        Self::Storage(err)
    }
}

impl EngineError {
    /// Text safe to show to a voter or admin.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { entity, .. } => {
                let mut chars = entity.chars();
                let title: String = chars
                    .next()
                    .map(|first| first.to_uppercase().chain(chars).collect())
                    .unwrap_or_default();
                format!("{title} not found")
            }
            Self::Storage(_) => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }

    /// True for errors that are part of normal operation.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Turn a missing-row storage error into [`EngineError::NotFound`].
pub(crate) trait OrNotFound<T> {
    fn or_not_found(self, entity: &'static str, id: i64) -> Result<T, EngineError>;
}

impl<T> OrNotFound<T> for Result<T, DatabaseError> {
    fn or_not_found(self, entity: &'static str, id: i64) -> Result<T, EngineError> {
        match self {
            Ok(value) => Ok(value),
            Err(DatabaseError::NoResult) => {
                tracing::debug!(entity, id, "not found");
                Err(EngineError::NotFound { entity, id })
            }
            Err(err) => Err(err.into()),
        }
    }
}
