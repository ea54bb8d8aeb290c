//! Vote types, category statuses, results visibility, and lifecycle actions.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the string stored in SQL. `CategoryStatus` carries the lifecycle
//! state machine; `LifecycleAction` names the admin operations that drive it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VoteType
// ---------------------------------------------------------------------------

/// How ballots in a category are cast and tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteType {
    /// Exactly one option per ballot.
    Single,
    /// Options ordered by preference, scored by position.
    Ranked,
    /// Any number of options per ballot, each counted once.
    Approval,
}

impl VoteType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Ranked => "ranked",
            Self::Approval => "approval",
        }
    }

    #[must_use]
    pub const fn is_ranked(self) -> bool {
        matches!(self, Self::Ranked)
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CategoryStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a category.
///
/// ```text
/// draft → open → closed → archived
///          ↑        │
///          └────────┘ (reopen)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    Draft,
    Open,
    Closed,
    Archived,
}

impl CategoryStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Open],
            Self::Open => &[Self::Closed],
            Self::Closed => &[Self::Open, Self::Archived],
            Self::Archived => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ShowResults
// ---------------------------------------------------------------------------

/// When voters may see a category's tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShowResults {
    /// Visible as soon as voting opens.
    Live,
    /// Visible only once the category is closed or archived.
    AfterClose,
}

impl ShowResults {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::AfterClose => "after_close",
        }
    }
}

impl fmt::Display for ShowResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LifecycleAction
// ---------------------------------------------------------------------------

/// Admin operation that moves a category through its lifecycle.
///
/// `Open` and `Reopen` share a target status and the "needs options" guard;
/// they differ only in the states they are legal from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Open,
    Close,
    Reopen,
    Archive,
}

impl LifecycleAction {
    /// Status the category ends up in after the action succeeds.
    #[must_use]
    pub const fn target(self) -> CategoryStatus {
        match self {
            Self::Open | Self::Reopen => CategoryStatus::Open,
            Self::Close => CategoryStatus::Closed,
            Self::Archive => CategoryStatus::Archived,
        }
    }

    /// Statuses from which the action may be applied.
    #[must_use]
    pub const fn legal_from(self) -> &'static [CategoryStatus] {
        match self {
            Self::Open => &[CategoryStatus::Draft, CategoryStatus::Closed],
            Self::Close => &[CategoryStatus::Open],
            Self::Reopen | Self::Archive => &[CategoryStatus::Closed],
        }
    }

    /// Whether the action is legal from `status`.
    #[must_use]
    pub fn is_legal_from(self, status: CategoryStatus) -> bool {
        self.legal_from().contains(&status) && status.can_transition_to(self.target())
    }

    /// Whether the category must have at least one option first.
    #[must_use]
    pub const fn requires_options(self) -> bool {
        matches!(self, Self::Open | Self::Reopen)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Reopen => "reopen",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
