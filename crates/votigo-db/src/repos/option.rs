//! Option repository.

use votigo_core::entities::PollOption;

use crate::VoteDb;
use crate::error::DatabaseError;

const SELECT_COLS: &str = "id, category_id, name, sort_order";

fn row_to_option(row: &libsql::Row) -> Result<PollOption, DatabaseError> {
    Ok(PollOption {
        id: row.get(0)?,
        category_id: row.get(1)?,
        name: row.get(2)?,
        sort_order: row.get(3)?,
    })
}

impl VoteDb {
    /// Append an option to a category.
    ///
    /// Its sort order is the category's option count at insert time, taken
    /// in the same statement.
    pub async fn create_option(
        &self,
        category_id: i64,
        name: &str,
    ) -> Result<PollOption, DatabaseError> {
        let _guard = self.write().await;

        let mut rows = self
            .conn
            .query(
                "INSERT INTO options (category_id, name, sort_order)
                 SELECT ?1, ?2, COUNT(*) FROM options WHERE category_id = ?1
                 RETURNING id, sort_order",
                libsql::params![category_id, name],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(PollOption {
            id: row.get(0)?,
            category_id,
            name: name.to_string(),
            sort_order: row.get(1)?,
        })
    }

    /// Options of a category in display order.
    pub async fn list_options(&self, category_id: i64) -> Result<Vec<PollOption>, DatabaseError> {
        let _guard = self.read().await;
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM options WHERE category_id = ?1 ORDER BY sort_order, id"
                ),
                [category_id],
            )
            .await?;

        let mut options = Vec::new();
        while let Some(row) = rows.next().await? {
            options.push(row_to_option(&row)?);
        }
        Ok(options)
    }

    /// Remove an option; selections that chose it cascade.
    pub async fn delete_option(&self, id: i64) -> Result<(), DatabaseError> {
        let _guard = self.write().await;
        let changed = self
            .conn
            .execute("DELETE FROM options WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from_write)?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{draft_category, test_db};
    use pretty_assertions::assert_eq;
    use votigo_core::enums::VoteType;

    #[tokio::test]
    async fn sort_order_follows_insertion() {
        let db = test_db().await;
        let cat = draft_category(&db, "Best Costume", VoteType::Single).await;

        let a = db.create_option(cat.id, "Pirate").await.unwrap();
        let b = db.create_option(cat.id, "Robot").await.unwrap();
        let c = db.create_option(cat.id, "Ghost").await.unwrap();

        assert_eq!((a.sort_order, b.sort_order, c.sort_order), (0, 1, 2));

        let names: Vec<String> = db
            .list_options(cat.id)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["Pirate", "Robot", "Ghost"]);
    }

    #[tokio::test]
    async fn sort_order_is_per_category() {
        let db = test_db().await;
        let first = draft_category(&db, "First", VoteType::Single).await;
        let second = draft_category(&db, "Second", VoteType::Approval).await;

        db.create_option(first.id, "A").await.unwrap();
        db.create_option(first.id, "B").await.unwrap();
        let other = db.create_option(second.id, "X").await.unwrap();

        assert_eq!(other.sort_order, 0);
    }

    #[tokio::test]
    async fn option_for_missing_category_is_constraint() {
        let db = test_db().await;
        let err = db.create_option(77, "Orphan").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Constraint(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn delete_option_once() {
        let db = test_db().await;
        let cat = draft_category(&db, "Snacks", VoteType::Approval).await;
        let opt = db.create_option(cat.id, "Chips").await.unwrap();
        let kept = db.create_option(cat.id, "Fruit").await.unwrap();

        db.delete_option(opt.id).await.unwrap();
        assert_eq!(db.list_options(cat.id).await.unwrap(), vec![kept]);
        assert!(matches!(
            db.delete_option(opt.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
