use anyhow::bail;
use votigo_core::enums::{ShowResults, VoteType};
use votigo_db::updates::category::{CategoryUpdate, CategoryUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    name: Option<&str>,
    vote_type: Option<&str>,
    max_rank: Option<i64>,
    show_results: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(name, vote_type, max_rank, show_results)?;
    if update.is_empty() {
        bail!("nothing to edit: pass --name, --type, --max-rank, or --show-results");
    }
    let category = ctx.engine.edit_category(id, update).await?;
    output(&category, flags.format)
}

fn build_update(
    name: Option<&str>,
    vote_type: Option<&str>,
    max_rank: Option<i64>,
    show_results: Option<&str>,
) -> anyhow::Result<CategoryUpdate> {
    let mut builder = CategoryUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(raw) = vote_type {
        builder = builder.vote_type(parse_enum::<VoteType>(raw, "type")?);
    }
    if let Some(max_rank) = max_rank {
        builder = builder.max_rank(Some(max_rank));
    }
    if let Some(raw) = show_results {
        builder = builder.show_results(parse_enum::<ShowResults>(raw, "show-results")?);
    }
    Ok(builder.build())
}
