use votigo_core::enums::LifecycleAction;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Category { action } => commands::category::handle(&action, ctx, flags).await,
        Commands::PollOption { action } => commands::option::handle(&action, ctx, flags).await,
        Commands::Open(args) => {
            commands::lifecycle::handle(LifecycleAction::Open, args.category_id, ctx, flags).await
        }
        Commands::Close(args) => {
            commands::lifecycle::handle(LifecycleAction::Close, args.category_id, ctx, flags).await
        }
        Commands::Reopen(args) => {
            commands::lifecycle::handle(LifecycleAction::Reopen, args.category_id, ctx, flags).await
        }
        Commands::Archive(args) => {
            commands::lifecycle::handle(LifecycleAction::Archive, args.category_id, ctx, flags)
                .await
        }
        Commands::Vote(args) => commands::vote::handle(&args, ctx, flags).await,
        Commands::Results(args) => commands::results::handle(&args, ctx, flags).await,
        Commands::Ballots => commands::ballots::handle_open(ctx, flags).await,
        Commands::Board => commands::ballots::handle_board(ctx, flags).await,
    }
}
