//! Vote repository: ballot upsert, selection replace, voter aggregates.

use chrono::{DateTime, Utc};

use votigo_core::entities::{Selection, Vote};
use votigo_core::enums::CategoryStatus;

use crate::VoteDb;
use crate::error::DatabaseError;
use crate::helpers::{get_aggregate, get_opt_i64, parse_enum};

const SELECTION_COLS: &str = "id, vote_id, option_id, rank";

fn row_to_selection(row: &libsql::Row) -> Result<Selection, DatabaseError> {
    Ok(Selection {
        id: row.get(0)?,
        vote_id: row.get(1)?,
        option_id: row.get(2)?,
        rank: get_opt_i64(row, 3)?,
    })
}

/// One validated selection to be written for a ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSelection {
    pub option_id: i64,
    pub rank: Option<i64>,
}

impl NewSelection {
    #[must_use]
    pub const fn unranked(option_id: i64) -> Self {
        Self {
            option_id,
            rank: None,
        }
    }

    #[must_use]
    pub const fn ranked(option_id: i64, rank: i64) -> Self {
        Self {
            option_id,
            rank: Some(rank),
        }
    }
}

/// Outcome of [`VoteDb::upsert_vote_with_selections`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBallot {
    pub vote: Vote,
    pub selections: Vec<Selection>,
    /// True when a vote row for this nickname already existed.
    pub replaced: bool,
}

async fn write_ballot(
    tx: &libsql::Transaction,
    category_id: i64,
    nickname: &str,
    now: DateTime<Utc>,
    selections: &[NewSelection],
) -> Result<(i64, bool, Vec<Selection>), DatabaseError> {
    let status: CategoryStatus = {
        let mut rows = tx
            .query("SELECT status FROM categories WHERE id = ?1", [category_id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        parse_enum(&row.get::<String>(0)?)?
    };
    if status != CategoryStatus::Open {
        return Err(DatabaseError::StatusConflict(status));
    }

    let replaced = {
        let mut rows = tx
            .query(
                "SELECT id FROM votes WHERE category_id = ?1 AND nickname = ?2",
                libsql::params![category_id, nickname],
            )
            .await?;
        rows.next().await?.is_some()
    };

    let vote_id: i64 = {
        let mut rows = tx
            .query(
                "INSERT INTO votes (category_id, nickname, created_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (category_id, nickname)
                 DO UPDATE SET created_at = excluded.created_at
                 RETURNING id",
                libsql::params![category_id, nickname, now.to_rfc3339()],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        rows.next().await?.ok_or(DatabaseError::NoResult)?.get(0)?
    };

    tx.execute("DELETE FROM vote_selections WHERE vote_id = ?1", [vote_id])
        .await?;

    let mut stored = Vec::with_capacity(selections.len());
    for selection in selections {
        let mut rows = tx
            .query(
                "INSERT INTO vote_selections (vote_id, option_id, rank)
                 VALUES (?1, ?2, ?3)
                 RETURNING id",
                libsql::params![vote_id, selection.option_id, selection.rank],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        stored.push(Selection {
            id: row.get(0)?,
            vote_id,
            option_id: selection.option_id,
            rank: selection.rank,
        });
    }

    Ok((vote_id, replaced, stored))
}

impl VoteDb {
    /// Record a ballot: upsert the vote by (category, nickname), then
    /// replace all of its selections.
    ///
    /// Runs in one transaction under the write gate, and the category must
    /// be `open` inside that transaction (`StatusConflict` otherwise). Any
    /// failure rolls the whole ballot back, leaving the previous vote and
    /// selections intact. `nickname` must already be normalized.
    pub async fn upsert_vote_with_selections(
        &self,
        category_id: i64,
        nickname: &str,
        selections: &[NewSelection],
    ) -> Result<StoredBallot, DatabaseError> {
        let now = Utc::now();
        let _guard = self.write().await;
        let tx = self.conn.transaction().await?;

        let written = write_ballot(&tx, category_id, nickname, now, selections).await;
        let (vote_id, replaced, stored) = match written {
            Ok(parts) => parts,
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(category_id, error = %rollback, "ballot rollback failed");
                }
                return Err(e);
            }
        };
        tx.commit().await?;
        tracing::debug!(category_id, vote_id, replaced, "ballot stored");

        Ok(StoredBallot {
            vote: Vote {
                id: vote_id,
                category_id,
                nickname: nickname.to_string(),
                created_at: now,
            },
            selections: stored,
            replaced,
        })
    }

    /// Selections of one vote, ranked ones in rank order.
    pub async fn list_selections(&self, vote_id: i64) -> Result<Vec<Selection>, DatabaseError> {
        let _guard = self.read().await;
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECTION_COLS} FROM vote_selections WHERE vote_id = ?1 ORDER BY rank, id"
                ),
                [vote_id],
            )
            .await?;

        let mut selections = Vec::new();
        while let Some(row) = rows.next().await? {
            selections.push(row_to_selection(&row)?);
        }
        Ok(selections)
    }

    /// Number of distinct voters in a category.
    pub async fn count_votes(&self, category_id: i64) -> Result<i64, DatabaseError> {
        let _guard = self.read().await;
        let mut rows = self
            .conn
            .query(
                "SELECT COUNT(*) FROM votes WHERE category_id = ?1",
                [category_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_aggregate(&row, 0)
    }

    /// Normalized nicknames of everyone who voted in a category, sorted.
    pub async fn list_voters(&self, category_id: i64) -> Result<Vec<String>, DatabaseError> {
        let _guard = self.read().await;
        let mut rows = self
            .conn
            .query(
                "SELECT nickname FROM votes WHERE category_id = ?1 ORDER BY nickname",
                [category_id],
            )
            .await?;

        let mut voters = Vec::new();
        while let Some(row) = rows.next().await? {
            voters.push(row.get::<String>(0)?);
        }
        Ok(voters)
    }
}
