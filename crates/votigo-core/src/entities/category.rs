use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CategoryStatus, ShowResults, VoteType};
use crate::rules;

/// A single poll: one vote type, one lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub vote_type: VoteType,
    pub status: CategoryStatus,
    pub show_results: ShowResults,
    /// Only set for ranked categories.
    pub max_rank: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Stored max-rank, or the system default when unset.
    #[must_use]
    pub fn effective_max_rank(&self) -> i64 {
        rules::effective_max_rank(self.max_rank)
    }

    /// Whether voters may currently see this category's tally.
    #[must_use]
    pub fn results_visible(&self) -> bool {
        rules::results_visible(self.status, self.show_results)
    }
}
