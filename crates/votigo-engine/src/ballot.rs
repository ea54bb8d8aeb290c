//! Ballot validation and recording.
//!
//! A submission is checked in a fixed order: category open, nickname
//! present, selections valid for the vote type, options belong to the
//! category. Only then is storage touched, with the vote upsert and the
//! selection replace running as one transaction that checks again that
//! the category is open.

use std::collections::HashSet;

use votigo_core::entities::{Category, PollOption};
use votigo_core::enums::VoteType;
use votigo_core::responses::BallotReceipt;
use votigo_core::rules::normalize_nickname;
use votigo_db::error::DatabaseError;
use votigo_db::repos::vote::NewSelection;

use crate::Engine;
use crate::error::{BallotRejection, EngineError, OrNotFound};
use crate::lifecycle::accepts_ballots;

/// Selections as submitted, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBallot {
    /// Chosen option ids, for `single` and `approval` categories.
    Choices(Vec<i64>),
    /// Option ids by preference; index 0 is rank 1. `None` is a blank position.
    Ranked(Vec<Option<i64>>),
}

impl RawBallot {
    /// A `single` ballot.
    #[must_use]
    pub fn single(option_id: i64) -> Self {
        Self::Choices(vec![option_id])
    }

    /// A ranked ballot with no blank positions.
    #[must_use]
    pub fn ranked(option_ids: &[i64]) -> Self {
        Self::Ranked(option_ids.iter().copied().map(Some).collect())
    }

    fn into_choices(self) -> Vec<i64> {
        match self {
            Self::Choices(ids) => ids,
            Self::Ranked(positions) => positions.into_iter().flatten().collect(),
        }
    }

    fn into_positions(self) -> Vec<Option<i64>> {
        match self {
            Self::Choices(ids) => ids.into_iter().map(Some).collect(),
            Self::Ranked(positions) => positions,
        }
    }
}

/// Turn a raw ballot into the selections to store, per the category's type.
///
/// # Errors
///
/// The first [`BallotRejection`] the ballot violates.
pub fn validate_selections(
    category: &Category,
    ballot: RawBallot,
) -> Result<Vec<NewSelection>, BallotRejection> {
    match category.vote_type {
        VoteType::Single => match ballot.into_choices().as_slice() {
            [] => Err(BallotRejection::NoSelection),
            [only] => Ok(vec![NewSelection::unranked(*only)]),
            _ => Err(BallotRejection::MultipleChoices),
        },
        VoteType::Approval => {
            let choices = ballot.into_choices();
            if choices.is_empty() {
                return Err(BallotRejection::EmptyBallot);
            }
            // Duplicates are recorded as submitted.
            Ok(choices.into_iter().map(NewSelection::unranked).collect())
        }
        VoteType::Ranked => validate_ranked(category.effective_max_rank(), ballot.into_positions()),
    }
}

fn validate_ranked(
    max_rank: i64,
    positions: Vec<Option<i64>>,
) -> Result<Vec<NewSelection>, BallotRejection> {
    let mut seen = HashSet::new();
    let mut selections = Vec::new();

    for (rank, option_id) in (1_i64..).zip(positions) {
        let Some(option_id) = option_id else {
            continue;
        };
        if rank > max_rank {
            return Err(BallotRejection::RankOutOfRange { max_rank });
        }
        if !seen.insert(option_id) {
            return Err(BallotRejection::DuplicateRankedChoice);
        }
        selections.push(NewSelection::ranked(option_id, rank));
    }

    if selections.is_empty() {
        return Err(BallotRejection::EmptyBallot);
    }
    Ok(selections)
}

fn ensure_known_options(
    options: &[PollOption],
    selections: &[NewSelection],
) -> Result<(), BallotRejection> {
    let known: HashSet<i64> = options.iter().map(|o| o.id).collect();
    if selections.iter().all(|s| known.contains(&s.option_id)) {
        Ok(())
    } else {
        Err(BallotRejection::UnknownOption)
    }
}

impl Engine {
    /// Validate and record a ballot, replacing any earlier ballot from the
    /// same nickname (case-insensitive) in full.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing category, `Validation` for a rejected
    /// ballot (nothing written), `Storage` if the write fails (nothing
    /// written either).
    pub async fn submit(
        &self,
        category_id: i64,
        nickname: &str,
        ballot: RawBallot,
    ) -> Result<BallotReceipt, EngineError> {
        let category = self.get_category(category_id).await?;

        if !accepts_ballots(category.status) {
            return Err(reject(category_id, BallotRejection::NotOpen));
        }
        let nickname = normalize_nickname(nickname)
            .ok_or_else(|| reject(category_id, BallotRejection::EmptyNickname))?;
        let selections =
            validate_selections(&category, ballot).map_err(|r| reject(category_id, r))?;
        let options = self.db().list_options(category_id).await?;
        ensure_known_options(&options, &selections).map_err(|r| reject(category_id, r))?;

        // The write re-checks status and options inside its transaction.
        let stored = match self
            .db()
            .upsert_vote_with_selections(category_id, &nickname, &selections)
            .await
        {
            Ok(stored) => stored,
            Err(DatabaseError::StatusConflict(_)) => {
                return Err(reject(category_id, BallotRejection::NotOpen));
            }
            Err(DatabaseError::Constraint(_)) => {
                return Err(reject(category_id, BallotRejection::UnknownOption));
            }
            Err(err) => return Err::<BallotReceipt, _>(err).or_not_found("category", category_id),
        };
        tracing::info!(
            category_id,
            vote_id = stored.vote.id,
            replaced = stored.replaced,
            selections = stored.selections.len(),
            "ballot recorded"
        );

        Ok(BallotReceipt {
            category_id,
            vote_id: stored.vote.id,
            nickname,
            replaced: stored.replaced,
            selections: stored.selections,
        })
    }
}

fn reject(category_id: i64, rejection: BallotRejection) -> EngineError {
    tracing::debug!(category_id, reason = %rejection, "ballot rejected");
    rejection.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{engine_with_category, open_poll};
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use votigo_core::enums::{CategoryStatus, ShowResults};

    fn category(vote_type: VoteType, max_rank: Option<i64>) -> Category {
        Category {
            id: 1,
            name: "Poll".into(),
            vote_type,
            status: CategoryStatus::Open,
            show_results: ShowResults::Live,
            max_rank,
            created_at: Utc::now(),
        }
    }

    fn ranks(selections: &[NewSelection]) -> Vec<(i64, Option<i64>)> {
        selections.iter().map(|s| (s.option_id, s.rank)).collect()
    }

    #[rstest]
    #[case(RawBallot::Choices(vec![]), BallotRejection::NoSelection)]
    #[case(RawBallot::Choices(vec![1, 2]), BallotRejection::MultipleChoices)]
    #[case(RawBallot::Ranked(vec![None, None]), BallotRejection::NoSelection)]
    fn single_rejections(#[case] ballot: RawBallot, #[case] expected: BallotRejection) {
        let cat = category(VoteType::Single, None);
        assert_eq!(validate_selections(&cat, ballot).unwrap_err(), expected);
    }

    #[test]
    fn approval_keeps_duplicates() {
        let cat = category(VoteType::Approval, None);
        let selections = validate_selections(&cat, RawBallot::Choices(vec![4, 4, 2])).unwrap();
        assert_eq!(ranks(&selections), vec![(4, None), (4, None), (2, None)]);

        assert_eq!(
            validate_selections(&cat, RawBallot::Choices(vec![])).unwrap_err(),
            BallotRejection::EmptyBallot
        );
    }

    #[test]
    fn ranked_positions_become_ranks_skipping_blanks() {
        let cat = category(VoteType::Ranked, Some(3));
        let selections =
            validate_selections(&cat, RawBallot::Ranked(vec![Some(7), None, Some(5)])).unwrap();
        assert_eq!(ranks(&selections), vec![(7, Some(1)), (5, Some(3))]);
    }

    #[rstest]
    #[case(vec![Some(1), Some(1)], BallotRejection::DuplicateRankedChoice)]
    #[case(vec![Some(1), None, Some(1)], BallotRejection::DuplicateRankedChoice)]
    #[case(vec![None, None, None], BallotRejection::EmptyBallot)]
    #[case(vec![], BallotRejection::EmptyBallot)]
    #[case(
        vec![Some(1), Some(2), Some(3), Some(4)],
        BallotRejection::RankOutOfRange { max_rank: 3 }
    )]
    fn ranked_rejections(#[case] positions: Vec<Option<i64>>, #[case] expected: BallotRejection) {
        let cat = category(VoteType::Ranked, None);
        assert_eq!(
            validate_selections(&cat, RawBallot::Ranked(positions)).unwrap_err(),
            expected
        );
    }

    #[test]
    fn trailing_blanks_beyond_cap_are_ignored() {
        let cat = category(VoteType::Ranked, Some(2));
        let selections =
            validate_selections(&cat, RawBallot::Ranked(vec![Some(1), Some(2), None, None]))
                .unwrap();
        assert_eq!(selections.len(), 2);
    }

    #[test]
    fn ranked_uses_effective_cap() {
        let cat = category(VoteType::Ranked, Some(0));
        let ok = validate_selections(&cat, RawBallot::ranked(&[1, 2, 3]));
        assert!(ok.is_ok());
        let too_many = validate_selections(&cat, RawBallot::ranked(&[1, 2, 3, 4]));
        assert_eq!(
            too_many.unwrap_err(),
            BallotRejection::RankOutOfRange { max_rank: 3 }
        );
    }

    #[tokio::test]
    async fn submit_rejects_when_not_open() {
        let (engine, cat) = engine_with_category(VoteType::Single, &["A"]).await;
        let a = engine.list_options(cat.id).await.unwrap()[0].id;

        let err = engine
            .submit(cat.id, "zoe", RawBallot::single(a))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(BallotRejection::NotOpen)
        ));
        assert_eq!(engine.db().count_votes(cat.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn submit_rejects_blank_nickname() {
        let (engine, cat, options) = open_poll(VoteType::Single, &["A"]).await;
        let err = engine
            .submit(cat.id, "   ", RawBallot::single(options[0].id))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Please enter a nickname");
    }

    #[tokio::test]
    async fn submit_rejects_option_from_another_category() {
        let (engine, cat, _) = open_poll(VoteType::Single, &["A"]).await;
        let other = engine
            .create_category(crate::NewCategory::new("Other", VoteType::Single))
            .await
            .unwrap();
        let foreign = engine.add_option(other.id, "B").await.unwrap();

        let err = engine
            .submit(cat.id, "zoe", RawBallot::single(foreign.id))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(BallotRejection::UnknownOption)
        ));
        assert_eq!(engine.db().count_votes(cat.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rejected_revote_keeps_previous_ballot() {
        let (engine, cat, options) = open_poll(VoteType::Ranked, &["X", "Y"]).await;
        let first = engine
            .submit(cat.id, "ada", RawBallot::ranked(&[options[0].id, options[1].id]))
            .await
            .unwrap();

        let err = engine
            .submit(cat.id, "ADA", RawBallot::ranked(&[options[1].id, options[1].id]))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Each choice must be different");

        let kept = engine.db().list_selections(first.vote_id).await.unwrap();
        assert_eq!(kept, first.selections);
    }

    #[tokio::test]
    async fn receipt_reports_replacement() {
        let (engine, cat, options) = open_poll(VoteType::Approval, &["A", "B"]).await;

        let first = engine
            .submit(cat.id, " Alice ", RawBallot::Choices(vec![options[0].id]))
            .await
            .unwrap();
        assert_eq!(first.nickname, "alice");
        assert!(!first.replaced);

        let second = engine
            .submit(
                cat.id,
                "alice",
                RawBallot::Choices(vec![options[0].id, options[1].id]),
            )
            .await
            .unwrap();
        assert!(second.replaced);
        assert_eq!(second.vote_id, first.vote_id);
        assert_eq!(second.selections.len(), 2);
    }

    #[tokio::test]
    async fn submit_to_missing_category_is_not_found() {
        let (engine, _, _) = open_poll(VoteType::Single, &["A"]).await;
        let err = engine
            .submit(404, "zoe", RawBallot::single(1))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound { entity: "category", id: 404 }));
    }
}
