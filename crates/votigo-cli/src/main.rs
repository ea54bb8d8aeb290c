use anyhow::Context;
use clap::Parser;
use votigo_engine::error::EngineError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", error_message(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    if command_requires_admin(&cli.command) {
        commands::shared::auth::require_admin(&config.admin, &flags)?;
    }

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to open the vote database")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Everything but voting and the voter-facing listings is admin-only.
const fn command_requires_admin(command: &cli::Commands) -> bool {
    match command {
        cli::Commands::Vote(_) | cli::Commands::Ballots | cli::Commands::Board => false,
        cli::Commands::Results(args) => !args.public,
        cli::Commands::Category { .. }
        | cli::Commands::PollOption { .. }
        | cli::Commands::Open(_)
        | cli::Commands::Close(_)
        | cli::Commands::Reopen(_)
        | cli::Commands::Archive(_) => true,
    }
}

/// Engine errors print their user-facing text; anything else prints its chain.
fn error_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<EngineError>() {
        Some(engine_error) => engine_error.user_message(),
        None => format!("votigo error: {error:#}"),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VOTIGO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
