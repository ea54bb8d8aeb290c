#[path = "option/add.rs"]
mod add;
#[path = "option/list.rs"]
mod list;
#[path = "option/remove.rs"]
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OptionCommands;
use crate::context::AppContext;

/// Handle `votigo option`.
pub async fn handle(
    action: &OptionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OptionCommands::Add { category_id, name } => add::run(*category_id, name, ctx, flags).await,
        OptionCommands::List { category_id } => list::run(*category_id, ctx, flags).await,
        OptionCommands::Remove { option_id } => remove::run(*option_id, ctx, flags).await,
    }
}
