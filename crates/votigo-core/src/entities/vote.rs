use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One voter's ballot for a category, keyed by lowercase nickname.
///
/// `created_at` is refreshed on every re-vote.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub category_id: i64,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

/// One chosen option within a ballot. `rank` is present only for ranked
/// ballots, 1 being the top choice.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Selection {
    pub id: i64,
    pub vote_id: i64,
    pub option_id: i64,
    pub rank: Option<i64>,
}
