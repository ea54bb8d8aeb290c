use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

/// Handle `votigo ballots`: what a voter can vote on right now.
pub async fn handle_open(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut categories = ctx.engine.list_open_categories().await?;
    truncate_to(
        &mut categories,
        effective_limit(None, flags.limit, ctx.config.general.default_limit),
    );
    output(&categories, flags.format)
}

/// Handle `votigo board`: categories whose results voters may see.
pub async fn handle_board(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut categories = ctx.engine.list_visible_categories().await?;
    truncate_to(
        &mut categories,
        effective_limit(None, flags.limit, ctx.config.general.default_limit),
    );
    output(&categories, flags.format)
}
