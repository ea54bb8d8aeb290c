#[path = "category/create.rs"]
mod create;
#[path = "category/delete.rs"]
mod delete;
#[path = "category/edit.rs"]
mod edit;
#[path = "category/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;

/// Handle `votigo category`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List { all, limit } => list::run(*all, *limit, ctx, flags).await,
        CategoryCommands::Create {
            name,
            vote_type,
            max_rank,
            show_results,
        } => {
            create::run(
                name,
                vote_type,
                *max_rank,
                show_results.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        CategoryCommands::Edit {
            id,
            name,
            vote_type,
            max_rank,
            show_results,
        } => {
            edit::run(
                *id,
                name.as_deref(),
                vote_type.as_deref(),
                *max_rank,
                show_results.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        CategoryCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
