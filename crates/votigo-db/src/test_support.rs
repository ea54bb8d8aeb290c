//! Shared test utilities for votigo-db unit tests.

pub(crate) mod helpers {
    use votigo_core::entities::Category;
    use votigo_core::enums::{CategoryStatus, ShowResults, VoteType};
    use votigo_core::rules::stored_max_rank;

    use crate::VoteDb;

    /// Create an isolated in-memory database.
    pub async fn test_db() -> VoteDb {
        VoteDb::open_local(":memory:").await.unwrap()
    }

    /// Create a `draft` category with live results and the default rank cap.
    pub async fn draft_category(db: &VoteDb, name: &str, vote_type: VoteType) -> Category {
        db.create_category(
            name,
            vote_type,
            ShowResults::Live,
            stored_max_rank(vote_type, None),
        )
        .await
        .unwrap()
    }

    /// Create a category with the given options and move it to `open`.
    pub async fn open_category(
        db: &VoteDb,
        name: &str,
        vote_type: VoteType,
        options: &[&str],
    ) -> Category {
        let cat = draft_category(db, name, vote_type).await;
        for option in options {
            db.create_option(cat.id, option).await.unwrap();
        }
        db.set_category_status(cat.id, CategoryStatus::Draft, CategoryStatus::Open, true)
            .await
            .unwrap()
    }
}
