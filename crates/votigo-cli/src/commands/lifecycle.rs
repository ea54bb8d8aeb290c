use votigo_core::enums::LifecycleAction;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `votigo open|close|reopen|archive`.
pub async fn handle(
    action: LifecycleAction,
    category_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let category = ctx.engine.transition(category_id, action).await?;
    output(&category, flags.format)
}
