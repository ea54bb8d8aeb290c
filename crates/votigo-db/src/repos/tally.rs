//! Aggregate queries behind the tally engine.
//!
//! Both queries start from `options` and LEFT JOIN selections, so every
//! option of the category appears even with nothing cast. Only selections
//! from votes in the same category count.

use votigo_core::responses::{RankedTallyRow, SimpleTallyRow};

use crate::VoteDb;
use crate::error::DatabaseError;
use crate::helpers::get_aggregate;

const SIMPLE_TALLY: &str = "\
    SELECT o.id, o.name, COUNT(s.id) AS votes
    FROM options o
    LEFT JOIN vote_selections s
        ON s.option_id = o.id
       AND s.vote_id IN (SELECT v.id FROM votes v WHERE v.category_id = o.category_id)
    WHERE o.category_id = ?1
    GROUP BY o.id, o.name, o.sort_order
    ORDER BY votes DESC, o.sort_order, o.id";

const RANKED_TALLY: &str = "\
    SELECT o.id, o.name,
           COALESCE(SUM(?2 - s.rank + 1), 0) AS points,
           COALESCE(SUM(CASE WHEN s.rank = 1 THEN 1 ELSE 0 END), 0) AS first_place
    FROM options o
    LEFT JOIN vote_selections s
        ON s.option_id = o.id
       AND s.rank IS NOT NULL
       AND s.vote_id IN (SELECT v.id FROM votes v WHERE v.category_id = o.category_id)
    WHERE o.category_id = ?1
    GROUP BY o.id, o.name, o.sort_order
    ORDER BY points DESC, first_place DESC, o.sort_order, o.id";

impl VoteDb {
    /// Selection count per option, best first; ties by sort order then id.
    pub async fn tally_simple(
        &self,
        category_id: i64,
    ) -> Result<Vec<SimpleTallyRow>, DatabaseError> {
        let _guard = self.read().await;
        let mut rows = self.conn.query(SIMPLE_TALLY, [category_id]).await?;

        let mut tally = Vec::new();
        while let Some(row) = rows.next().await? {
            tally.push(SimpleTallyRow {
                option_id: row.get(0)?,
                name: row.get(1)?,
                votes: get_aggregate(&row, 2)?,
            });
        }
        Ok(tally)
    }

    /// Points per option where rank `r` earns `max_rank - r + 1`, best first;
    /// ties by first-place count, sort order, then id.
    pub async fn tally_ranked(
        &self,
        category_id: i64,
        max_rank: i64,
    ) -> Result<Vec<RankedTallyRow>, DatabaseError> {
        let _guard = self.read().await;
        let mut rows = self
            .conn
            .query(RANKED_TALLY, libsql::params![category_id, max_rank])
            .await?;

        let mut tally = Vec::new();
        while let Some(row) = rows.next().await? {
            tally.push(RankedTallyRow {
                option_id: row.get(0)?,
                name: row.get(1)?,
                points: get_aggregate(&row, 2)?,
                first_place: get_aggregate(&row, 3)?,
            });
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::vote::NewSelection;
    use crate::test_support::helpers::{open_category, test_db};
    use pretty_assertions::assert_eq;
    use votigo_core::enums::VoteType;

    fn simple_pairs(rows: &[SimpleTallyRow]) -> Vec<(&str, i64)> {
        rows.iter().map(|r| (r.name.as_str(), r.votes)).collect()
    }

    fn ranked_triples(rows: &[RankedTallyRow]) -> Vec<(&str, i64, i64)> {
        rows.iter()
            .map(|r| (r.name.as_str(), r.points, r.first_place))
            .collect()
    }

    #[tokio::test]
    async fn empty_category_reports_zeroes_in_sort_order() {
        let db = test_db().await;
        let cat = open_category(&db, "Best Costume", VoteType::Single, &["A", "B", "C"]).await;

        let tally = db.tally_simple(cat.id).await.unwrap();
        assert_eq!(simple_pairs(&tally), vec![("A", 0), ("B", 0), ("C", 0)]);

        let ranked = db.tally_ranked(cat.id, 3).await.unwrap();
        assert_eq!(
            ranked_triples(&ranked),
            vec![("A", 0, 0), ("B", 0, 0), ("C", 0, 0)]
        );
    }

    #[tokio::test]
    async fn simple_tally_orders_by_count_then_sort_order() {
        let db = test_db().await;
        let cat = open_category(&db, "Snacks", VoteType::Approval, &["A", "B", "C"]).await;
        let o = db.list_options(cat.id).await.unwrap();

        db.upsert_vote_with_selections(
            cat.id,
            "one",
            &[NewSelection::unranked(o[2].id), NewSelection::unranked(o[1].id)],
        )
        .await
        .unwrap();
        db.upsert_vote_with_selections(cat.id, "two", &[NewSelection::unranked(o[1].id)])
            .await
            .unwrap();
        db.upsert_vote_with_selections(cat.id, "three", &[NewSelection::unranked(o[0].id)])
            .await
            .unwrap();

        let tally = db.tally_simple(cat.id).await.unwrap();
        // A and C tie at 1; A has the lower sort order.
        assert_eq!(simple_pairs(&tally), vec![("B", 2), ("A", 1), ("C", 1)]);
    }

    #[tokio::test]
    async fn ranked_tally_scores_and_breaks_ties() {
        let db = test_db().await;
        let cat = open_category(&db, "Best Game", VoteType::Ranked, &["X", "Y", "Z"]).await;
        let o = db.list_options(cat.id).await.unwrap();

        // X: 3 + 1 = 4 points, one first place. Y: 2 + 2 = 4 points, none.
        // Z: 3 points, one first place.
        db.upsert_vote_with_selections(
            cat.id,
            "ada",
            &[
                NewSelection::ranked(o[0].id, 1),
                NewSelection::ranked(o[1].id, 2),
            ],
        )
        .await
        .unwrap();
        db.upsert_vote_with_selections(
            cat.id,
            "bob",
            &[
                NewSelection::ranked(o[2].id, 1),
                NewSelection::ranked(o[1].id, 2),
                NewSelection::ranked(o[0].id, 3),
            ],
        )
        .await
        .unwrap();

        let tally = db.tally_ranked(cat.id, 3).await.unwrap();
        assert_eq!(
            ranked_triples(&tally),
            vec![("X", 4, 1), ("Y", 4, 0), ("Z", 3, 1)]
        );
    }

    #[tokio::test]
    async fn ranks_beyond_cap_count_literally() {
        let db = test_db().await;
        let cat = open_category(&db, "Best Game", VoteType::Ranked, &["X", "Y"]).await;
        let o = db.list_options(cat.id).await.unwrap();

        db.upsert_vote_with_selections(
            cat.id,
            "ada",
            &[
                NewSelection::ranked(o[0].id, 1),
                NewSelection::ranked(o[1].id, 3),
            ],
        )
        .await
        .unwrap();

        // With the cap lowered to 1, rank 3 contributes 1 - 3 + 1 = -1.
        let tally = db.tally_ranked(cat.id, 1).await.unwrap();
        assert_eq!(ranked_triples(&tally), vec![("X", 1, 1), ("Y", -1, 0)]);
    }

    #[tokio::test]
    async fn tallies_ignore_other_categories() {
        let db = test_db().await;
        let cat = open_category(&db, "Mine", VoteType::Single, &["A"]).await;
        let other = open_category(&db, "Theirs", VoteType::Single, &["B"]).await;
        let a = db.list_options(cat.id).await.unwrap()[0].id;

        // A ballot in `other` that points at an option of `cat`.
        db.upsert_vote_with_selections(other.id, "sneaky", &[NewSelection::unranked(a)])
            .await
            .unwrap();

        let tally = db.tally_simple(cat.id).await.unwrap();
        assert_eq!(simple_pairs(&tally), vec![("A", 0)]);
    }
}
