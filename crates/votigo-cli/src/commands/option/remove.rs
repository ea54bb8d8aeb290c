use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemoveResponse {
    option_id: i64,
    removed: bool,
}

pub async fn run(option_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.engine.remove_option(option_id).await?;
    output(
        &RemoveResponse {
            option_id,
            removed: true,
        },
        flags.format,
    )
}
