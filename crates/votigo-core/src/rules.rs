//! Pure domain rules shared by ballot validation, lifecycle checks, and tallying.
//!
//! Nothing here touches storage. Every call site that needs the max-rank
//! default goes through [`effective_max_rank`].

use crate::enums::{CategoryStatus, ShowResults, VoteType};
use crate::errors::CoreError;

/// System-wide default cap on ranked positions.
pub const DEFAULT_MAX_RANK: i64 = 3;

/// Largest cap a category may store. Keeps ranked point sums in integer range.
pub const MAX_RANK_LIMIT: i64 = 1000;

/// Resolve the max-rank to use for a category: the stored value, or
/// [`DEFAULT_MAX_RANK`] when unset or non-positive.
#[must_use]
pub fn effective_max_rank(stored: Option<i64>) -> i64 {
    stored.filter(|rank| *rank > 0).unwrap_or(DEFAULT_MAX_RANK)
}

/// Max-rank value to persist for a category of `vote_type`.
///
/// Ranked categories always store a positive value; every other type
/// stores `None`.
#[must_use]
pub fn stored_max_rank(vote_type: VoteType, requested: Option<i64>) -> Option<i64> {
    vote_type
        .is_ranked()
        .then(|| effective_max_rank(requested))
}

/// Whether a category's tally may be shown to voters.
///
/// `live` exposes results from `open` onward; `after_close` only once the
/// category is `closed` or `archived`. Drafts never expose results.
#[must_use]
pub const fn results_visible(status: CategoryStatus, show_results: ShowResults) -> bool {
    match show_results {
        ShowResults::Live => !matches!(status, CategoryStatus::Draft),
        ShowResults::AfterClose => {
            matches!(status, CategoryStatus::Closed | CategoryStatus::Archived)
        }
    }
}

/// Normalize a voter nickname to its identity form: trimmed and lowercased.
///
/// Returns `None` when nothing remains after trimming.
#[must_use]
pub fn normalize_nickname(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Trim a category or option name, rejecting blanks.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the name is empty after trimming.
pub fn normalize_name(raw: &str, what: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{what} name is required")));
    }
    Ok(trimmed.to_string())
}

/// Reject a requested max-rank above [`MAX_RANK_LIMIT`].
///
/// Non-positive and missing values are fine here; they resolve to the
/// default.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the cap is too large.
pub fn check_max_rank(requested: Option<i64>) -> Result<(), CoreError> {
    match requested {
        Some(rank) if rank > MAX_RANK_LIMIT => Err(CoreError::Validation(format!(
            "Max rank must be at most {MAX_RANK_LIMIT}"
        ))),
        _ => Ok(()),
    }
}
