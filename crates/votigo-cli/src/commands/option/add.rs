use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    category_id: i64,
    name: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let option = ctx.engine.add_option(category_id, name).await?;
    output(&option, flags.format)
}
