//! Category update builder.

use serde::Serialize;
use votigo_core::enums::{ShowResults, VoteType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_type: Option<VoteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_results: Option<ShowResults>,
    /// `Some(None)` clears the cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rank: Option<Option<i64>>,
}

impl CategoryUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.vote_type.is_none()
            && self.show_results.is_none()
            && self.max_rank.is_none()
    }
}

pub struct CategoryUpdateBuilder(CategoryUpdate);

impl CategoryUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CategoryUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn vote_type(mut self, vote_type: VoteType) -> Self {
        self.0.vote_type = Some(vote_type);
        self
    }

    #[must_use]
    pub const fn show_results(mut self, show_results: ShowResults) -> Self {
        self.0.show_results = Some(show_results);
        self
    }

    #[must_use]
    pub const fn max_rank(mut self, max_rank: Option<i64>) -> Self {
        self.0.max_rank = Some(max_rank);
        self
    }

    #[must_use]
    pub fn build(self) -> CategoryUpdate {
        self.0
    }
}

impl Default for CategoryUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
