//! Category repository: CRUD, status writes, listings.

use chrono::Utc;

use votigo_core::entities::Category;
use votigo_core::enums::{CategoryStatus, ShowResults, VoteType};

use crate::VoteDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_i64, parse_datetime, parse_enum};
use crate::updates::category::CategoryUpdate;

const SELECT_COLS: &str = "id, name, vote_type, status, show_results, max_rank, created_at";

fn row_to_category(row: &libsql::Row) -> Result<Category, DatabaseError> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        vote_type: parse_enum(&row.get::<String>(2)?)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        show_results: parse_enum(&row.get::<String>(4)?)?,
        max_rank: get_opt_i64(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl VoteDb {
    /// Insert a new category in `draft` status.
    ///
    /// `max_rank` is written as given; callers resolve it against the vote
    /// type first (the schema rejects a mismatch).
    pub async fn create_category(
        &self,
        name: &str,
        vote_type: VoteType,
        show_results: ShowResults,
        max_rank: Option<i64>,
    ) -> Result<Category, DatabaseError> {
        let now = Utc::now();
        let _guard = self.write().await;

        let mut rows = self
            .conn
            .query(
                "INSERT INTO categories (name, vote_type, status, show_results, max_rank, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 RETURNING id",
                libsql::params![
                    name,
                    vote_type.as_str(),
                    CategoryStatus::Draft.as_str(),
                    show_results.as_str(),
                    max_rank,
                    now.to_rfc3339()
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(Category {
            id: row.get(0)?,
            name: name.to_string(),
            vote_type,
            status: CategoryStatus::Draft,
            show_results,
            max_rank,
            created_at: now,
        })
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, DatabaseError> {
        let _guard = self.read().await;
        self.get_category_unlocked(id).await
    }

    async fn get_category_unlocked(&self, id: i64) -> Result<Category, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM categories WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_category(&row)
    }

    /// All categories, oldest first. Archived ones only when asked for.
    pub async fn list_categories(
        &self,
        include_archived: bool,
    ) -> Result<Vec<Category>, DatabaseError> {
        let _guard = self.read().await;
        let filter = if include_archived {
            String::new()
        } else {
            format!("WHERE status != '{}'", CategoryStatus::Archived.as_str())
        };
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM categories {filter} ORDER BY created_at, id"),
                (),
            )
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row_to_category(&row)?);
        }
        Ok(categories)
    }

    /// Categories currently accepting ballots.
    pub async fn list_open_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let _guard = self.read().await;
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM categories WHERE status = ?1 ORDER BY created_at, id"
                ),
                [CategoryStatus::Open.as_str()],
            )
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row_to_category(&row)?);
        }
        Ok(categories)
    }

    pub async fn update_category(
        &self,
        id: i64,
        update: &CategoryUpdate,
    ) -> Result<Category, DatabaseError> {
        let _guard = self.write().await;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(vote_type) = update.vote_type {
            sets.push(format!("vote_type = ?{idx}"));
            params.push(vote_type.as_str().into());
            idx += 1;
        }
        if let Some(show_results) = update.show_results {
            sets.push(format!("show_results = ?{idx}"));
            params.push(show_results.as_str().into());
            idx += 1;
        }
        if let Some(max_rank) = update.max_rank {
            sets.push(format!("max_rank = ?{idx}"));
            params.push(max_rank.map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_category_unlocked(id).await;
        }

        params.push(id.into());
        let sql = format!("UPDATE categories SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .conn
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(DatabaseError::from_write)?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        self.get_category_unlocked(id).await
    }

    /// Move a category from `expected` to `next` in one compare-and-set write.
    ///
    /// With `require_options`, the same write also requires at least one
    /// option to exist. Fails with `StatusConflict` if the stored status is
    /// no longer `expected`, or `NoOptions` if the option guard failed.
    /// Legality of the move is checked by the caller.
    pub async fn set_category_status(
        &self,
        id: i64,
        expected: CategoryStatus,
        next: CategoryStatus,
        require_options: bool,
    ) -> Result<Category, DatabaseError> {
        let _guard = self.write().await;

        let changed = self
            .conn
            .execute(
                "UPDATE categories SET status = ?1
                 WHERE id = ?2 AND status = ?3
                   AND (?4 = 0 OR EXISTS (SELECT 1 FROM options WHERE category_id = ?2))",
                libsql::params![
                    next.as_str(),
                    id,
                    expected.as_str(),
                    i64::from(require_options)
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;

        if changed == 0 {
            let current = self.get_category_unlocked(id).await?;
            if current.status != expected {
                return Err(DatabaseError::StatusConflict(current.status));
            }
            return Err(DatabaseError::NoOptions);
        }

        self.get_category_unlocked(id).await
    }

    /// Delete a category; options, votes, and selections cascade.
    pub async fn delete_category(&self, id: i64) -> Result<(), DatabaseError> {
        let _guard = self.write().await;
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from_write)?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}
