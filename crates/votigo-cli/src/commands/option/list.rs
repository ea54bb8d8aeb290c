use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Prints the category with its options; table output lists the options only.
pub async fn run(category_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = ctx.engine.category_detail(category_id).await?;
    match flags.format {
        OutputFormat::Table => output(&detail.options, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&detail, flags.format),
    }
}
