//! Category and option management, and the lifecycle state machine.
//!
//! Status changes go through [`Engine::transition`], which checks the
//! action against the current status, then writes with one compare-and-set
//! that also carries the "needs options" guard for `open`/`reopen`. A
//! concurrent change is reported as a refused transition instead of being
//! overwritten.

use serde::{Deserialize, Serialize};
use votigo_core::entities::{Category, PollOption};
use votigo_core::enums::{CategoryStatus, LifecycleAction, ShowResults, VoteType};
use votigo_core::responses::CategoryDetail;
use votigo_core::rules::{check_max_rank, normalize_name, results_visible, stored_max_rank};
use votigo_db::error::DatabaseError;
use votigo_db::updates::category::CategoryUpdate;

use crate::Engine;
use crate::error::{EngineError, OrNotFound, TransitionError};

/// Input for [`Engine::create_category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub vote_type: VoteType,
    pub show_results: ShowResults,
    /// Ignored unless `vote_type` is `ranked`; unset or non-positive means 3.
    /// At most [`votigo_core::rules::MAX_RANK_LIMIT`].
    pub max_rank: Option<i64>,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: impl Into<String>, vote_type: VoteType) -> Self {
        Self {
            name: name.into(),
            vote_type,
            show_results: ShowResults::AfterClose,
            max_rank: None,
        }
    }

    #[must_use]
    pub const fn show_results(mut self, show_results: ShowResults) -> Self {
        self.show_results = show_results;
        self
    }

    #[must_use]
    pub const fn max_rank(mut self, max_rank: i64) -> Self {
        self.max_rank = Some(max_rank);
        self
    }
}

impl Engine {
    /// Create a category in `draft`.
    ///
    /// # Errors
    ///
    /// `Input` for a blank name or an oversized cap, `Storage` on write
    /// failure.
    pub async fn create_category(&self, new: NewCategory) -> Result<Category, EngineError> {
        let name = normalize_name(&new.name, "Category")?;
        if new.vote_type.is_ranked() {
            check_max_rank(new.max_rank)?;
        }
        let max_rank = stored_max_rank(new.vote_type, new.max_rank);

        let category = self
            .db()
            .create_category(&name, new.vote_type, new.show_results, max_rank)
            .await?;
        tracing::info!(
            category_id = category.id,
            vote_type = %category.vote_type,
            "category created"
        );
        Ok(category)
    }

    /// Apply an edit at any status.
    ///
    /// Names are trimmed and must stay non-empty. Whenever the type or cap is
    /// touched, the stored cap is re-resolved against the resulting type.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Input` for a blank name or an oversized cap, or `Storage`.
    pub async fn edit_category(
        &self,
        id: i64,
        mut update: CategoryUpdate,
    ) -> Result<Category, EngineError> {
        let current = self.db().get_category(id).await.or_not_found("category", id)?;

        if let Some(ref name) = update.name {
            update.name = Some(normalize_name(name, "Category")?);
        }
        if update.vote_type.is_some() || update.max_rank.is_some() {
            let vote_type = update.vote_type.unwrap_or(current.vote_type);
            let requested = update.max_rank.unwrap_or(current.max_rank);
            if vote_type.is_ranked() {
                check_max_rank(requested)?;
            }
            update.max_rank = Some(stored_max_rank(vote_type, requested));
        }

        let category = self
            .db()
            .update_category(id, &update)
            .await
            .or_not_found("category", id)?;
        tracing::info!(category_id = id, "category edited");
        Ok(category)
    }

    /// Delete a category with all of its options and ballots.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn delete_category(&self, id: i64) -> Result<(), EngineError> {
        self.db().delete_category(id).await.or_not_found("category", id)?;
        tracing::info!(category_id = id, "category deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn get_category(&self, id: i64) -> Result<Category, EngineError> {
        self.db().get_category(id).await.or_not_found("category", id)
    }

    /// A category together with its options in display order.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn category_detail(&self, id: i64) -> Result<CategoryDetail, EngineError> {
        let category = self.get_category(id).await?;
        let options = self.db().list_options(id).await?;
        Ok(CategoryDetail { category, options })
    }

    /// Admin listing. Archived categories only with `include_archived`.
    ///
    /// # Errors
    ///
    /// `Storage`.
    pub async fn list_categories(
        &self,
        include_archived: bool,
    ) -> Result<Vec<Category>, EngineError> {
        Ok(self.db().list_categories(include_archived).await?)
    }

    /// Voter listing: categories accepting ballots right now.
    ///
    /// # Errors
    ///
    /// `Storage`.
    pub async fn list_open_categories(&self) -> Result<Vec<Category>, EngineError> {
        Ok(self.db().list_open_categories().await?)
    }

    /// Active categories whose results voters may see right now.
    ///
    /// # Errors
    ///
    /// `Storage`.
    pub async fn list_visible_categories(&self) -> Result<Vec<Category>, EngineError> {
        let categories = self.db().list_categories(false).await?;
        Ok(categories
            .into_iter()
            .filter(|c| results_visible(c.status, c.show_results))
            .collect())
    }

    /// Append an option. Allowed at any status.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing category, `Input` for a blank name, `Storage`.
    pub async fn add_option(
        &self,
        category_id: i64,
        name: &str,
    ) -> Result<PollOption, EngineError> {
        let name = normalize_name(name, "Option")?;
        self.get_category(category_id).await?;

        let option = match self.db().create_option(category_id, &name).await {
            Ok(option) => option,
            // Category deleted between the check and the insert.
            Err(DatabaseError::Constraint(_)) => {
                return Err(EngineError::NotFound {
                    entity: "category",
                    id: category_id,
                });
            }
            Err(err) => return Err(err.into()),
        };
        tracing::info!(category_id, option_id = option.id, "option added");
        Ok(option)
    }

    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn list_options(&self, category_id: i64) -> Result<Vec<PollOption>, EngineError> {
        Ok(self.category_detail(category_id).await?.options)
    }

    /// Remove an option; ballots keep their other selections.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub async fn remove_option(&self, option_id: i64) -> Result<(), EngineError> {
        self.db()
            .delete_option(option_id)
            .await
            .or_not_found("option", option_id)?;
        tracing::info!(option_id, "option removed");
        Ok(())
    }

    /// Apply a lifecycle action.
    ///
    /// # Errors
    ///
    /// `NotFound`, `InvalidTransition` (status unchanged), or `Storage`.
    pub async fn transition(
        &self,
        id: i64,
        action: LifecycleAction,
    ) -> Result<Category, EngineError> {
        let category = self.get_category(id).await?;

        if !action.is_legal_from(category.status) {
            return Err(refuse(id, TransitionError::NotAllowed {
                from: category.status,
                action,
            }));
        }
        match self
            .db()
            .set_category_status(
                id,
                category.status,
                action.target(),
                action.requires_options(),
            )
            .await
        {
            Ok(updated) => {
                tracing::info!(
                    category_id = id,
                    from = %category.status,
                    status = %updated.status,
                    "category {action}"
                );
                Ok(updated)
            }
            Err(DatabaseError::StatusConflict(current)) => {
                Err(refuse(id, TransitionError::NotAllowed {
                    from: current,
                    action,
                }))
            }
            Err(DatabaseError::NoOptions) => Err(refuse(id, TransitionError::NeedsOptions)),
            Err(err) => Err::<Category, _>(err).or_not_found("category", id),
        }
    }

    /// # Errors
    ///
    /// See [`Engine::transition`].
    pub async fn open(&self, id: i64) -> Result<Category, EngineError> {
        self.transition(id, LifecycleAction::Open).await
    }

    /// # Errors
    ///
    /// See [`Engine::transition`].
    pub async fn close(&self, id: i64) -> Result<Category, EngineError> {
        self.transition(id, LifecycleAction::Close).await
    }

    /// # Errors
    ///
    /// See [`Engine::transition`].
    pub async fn reopen(&self, id: i64) -> Result<Category, EngineError> {
        self.transition(id, LifecycleAction::Reopen).await
    }

    /// # Errors
    ///
    /// See [`Engine::transition`].
    pub async fn archive(&self, id: i64) -> Result<Category, EngineError> {
        self.transition(id, LifecycleAction::Archive).await
    }
}

fn refuse(id: i64, err: TransitionError) -> EngineError {
    tracing::debug!(category_id = id, reason = %err, "transition refused");
    EngineError::InvalidTransition(err)
}

/// Whether `status` accepts ballots.
#[must_use]
pub const fn accepts_ballots(status: CategoryStatus) -> bool {
    matches!(status, CategoryStatus::Open)
}
