use votigo_core::entities::Category;
use votigo_core::enums::{ShowResults, VoteType};
use votigo_engine::NewCategory;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    vote_type: &str,
    max_rank: Option<i64>,
    show_results: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let category = create(name, vote_type, max_rank, show_results, ctx).await?;
    output(&category, flags.format)
}

async fn create(
    name: &str,
    vote_type: &str,
    max_rank: Option<i64>,
    show_results: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<Category> {
    let vote_type = parse_enum::<VoteType>(vote_type, "type")?;
    let show_results = match show_results {
        Some(raw) => parse_enum::<ShowResults>(raw, "show-results")?,
        None => ctx.config.general.default_show_results,
    };

    let mut new = NewCategory::new(name, vote_type).show_results(show_results);
    if let Some(max_rank) = max_rank {
        new = new.max_rank(max_rank);
    }
    Ok(ctx.engine.create_category(new).await?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use votigo_core::enums::{CategoryStatus, ShowResults, VoteType};

    use super::create;
    use crate::commands::test_support::memory_context;

    #[tokio::test]
    async fn visibility_defaults_come_from_config() {
        let mut ctx = memory_context().await;
        ctx.config.general.default_show_results = ShowResults::Live;

        let category = create("Snacks", "approval", None, None, &ctx)
            .await
            .expect("category should be created");
        assert_eq!(category.show_results, ShowResults::Live);
        assert_eq!(category.status, CategoryStatus::Draft);
        assert_eq!(category.max_rank, None);
    }

    #[tokio::test]
    async fn ranked_without_cap_stores_default() {
        let ctx = memory_context().await;
        let category = create("Best Game", "ranked", None, Some("after_close"), &ctx)
            .await
            .expect("category should be created");
        assert_eq!(category.vote_type, VoteType::Ranked);
        assert_eq!(category.max_rank, Some(3));
    }

    #[tokio::test]
    async fn unknown_type_is_rejected_before_storage() {
        let ctx = memory_context().await;
        let err = create("Odd", "borda", None, None, &ctx)
            .await
            .expect_err("type should be rejected");
        assert!(err.to_string().contains("invalid type 'borda'"));
        assert!(ctx.engine.list_categories(true).await.expect("list").is_empty());
    }
}
