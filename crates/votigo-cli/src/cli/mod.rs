use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `votigo` binary.
#[derive(Debug, Parser)]
#[command(name = "votigo", version, about = "Votigo - quick polls for local events")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (overrides `database.path` from config)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to return from list commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Admin username (defaults to `admin.username` from config)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Admin password, required for admin commands once one is configured
    #[arg(long, global = true)]
    pub password: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}
