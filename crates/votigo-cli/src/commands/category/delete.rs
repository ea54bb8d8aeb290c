use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    category_id: i64,
    deleted: bool,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.engine.delete_category(id).await?;
    output(
        &DeleteResponse {
            category_id: id,
            deleted: true,
        },
        flags.format,
    )
}
