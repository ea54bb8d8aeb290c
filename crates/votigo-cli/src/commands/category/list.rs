use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    all: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let mut categories = ctx.engine.list_categories(all).await?;
    truncate_to(&mut categories, limit);
    output(&categories, flags.format)
}
