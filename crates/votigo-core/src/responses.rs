//! Typed results returned by the engine and rendered by `votigo` commands.
//!
//! Tally rows carry plain integers; any conversion from the storage layer's
//! numeric representation happens before these are built.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Category, PollOption, Selection};

/// One row of a `single` or `approval` tally.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SimpleTallyRow {
    pub option_id: i64,
    pub name: String,
    pub votes: i64,
}

/// One row of a `ranked` tally.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RankedTallyRow {
    pub option_id: i64,
    pub name: String,
    pub points: i64,
    pub first_place: i64,
}

/// Ordered ranking for a category, best first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tally {
    Simple { rows: Vec<SimpleTallyRow> },
    Ranked { max_rank: i64, rows: Vec<RankedTallyRow> },
}

impl Tally {
    /// Number of ranked rows (one per option in the category).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Simple { rows } => rows.len(),
            Self::Ranked { rows, .. } => rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Response from `votigo results`.
///
/// `visible` is the voter visibility rule for the category's current
/// status. The voter view withholds the tally, count, and voters when it is
/// false; the admin view always carries them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResultsResponse {
    pub category: Category,
    pub visible: bool,
    /// Distinct voters, not selections.
    pub vote_count: Option<i64>,
    pub tally: Option<Tally>,
    pub voters: Option<Vec<String>>,
}

/// Response from `votigo vote`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BallotReceipt {
    pub category_id: i64,
    pub vote_id: i64,
    pub nickname: String,
    /// True when an earlier ballot from the same nickname was replaced.
    pub replaced: bool,
    pub selections: Vec<Selection>,
}

/// Response from `votigo option list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryDetail {
    pub category: Category,
    pub options: Vec<PollOption>,
}
