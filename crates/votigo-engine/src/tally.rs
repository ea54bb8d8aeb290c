//! Tallies, voter counts, and the results visibility gate.

use votigo_core::entities::Category;
use votigo_core::enums::VoteType;
use votigo_core::responses::{ResultsResponse, Tally};

use crate::Engine;
use crate::error::EngineError;

/// Who is asking for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    /// Always sees the tally.
    Admin,
    /// Sees the tally only when the category's visibility rule allows it.
    Public,
}

impl Engine {
    /// Compute the tally for a category, picking the algorithm by vote type.
    ///
    /// Every option of the category is listed, including those with no
    /// selections.
    ///
    /// # Errors
    ///
    /// `Storage`.
    pub async fn tally(&self, category: &Category) -> Result<Tally, EngineError> {
        match category.vote_type {
            VoteType::Single | VoteType::Approval => Ok(Tally::Simple {
                rows: self.db().tally_simple(category.id).await?,
            }),
            VoteType::Ranked => {
                let max_rank = category.effective_max_rank();
                Ok(Tally::Ranked {
                    max_rank,
                    rows: self.db().tally_ranked(category.id, max_rank).await?,
                })
            }
        }
    }

    /// Number of voters (not selections) in a category.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn vote_count(&self, category_id: i64) -> Result<i64, EngineError> {
        self.get_category(category_id).await?;
        Ok(self.db().count_votes(category_id).await?)
    }

    /// Normalized nicknames of a category's voters, sorted.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn voters(&self, category_id: i64) -> Result<Vec<String>, EngineError> {
        self.get_category(category_id).await?;
        Ok(self.db().list_voters(category_id).await?)
    }

    /// Results for one category.
    ///
    /// Visibility is recomputed from the current status on every call. In
    /// the public view a hidden category comes back with no tally, count,
    /// or voters.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn results(
        &self,
        category_id: i64,
        view: ResultsView,
        include_voters: bool,
    ) -> Result<ResultsResponse, EngineError> {
        let category = self.get_category(category_id).await?;
        let visible = category.results_visible();

        if view == ResultsView::Public && !visible {
            tracing::debug!(category_id, status = %category.status, "results hidden");
            return Ok(ResultsResponse {
                category,
                visible,
                vote_count: None,
                tally: None,
                voters: None,
            });
        }

        let tally = self.tally(&category).await?;
        let vote_count = self.db().count_votes(category_id).await?;
        let voters = if include_voters {
            Some(self.db().list_voters(category_id).await?)
        } else {
            None
        };

        Ok(ResultsResponse {
            category,
            visible,
            vote_count: Some(vote_count),
            tally: Some(tally),
            voters,
        })
    }
}
