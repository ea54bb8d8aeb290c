use clap::{Args, Subcommand};

use crate::cli::subcommands::{CategoryCommands, OptionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Manage categories (polls).
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Manage the options of a category.
    #[command(name = "option")]
    PollOption {
        #[command(subcommand)]
        action: OptionCommands,
    },
    /// Open a category for voting.
    Open(CategoryIdArgs),
    /// Stop accepting ballots.
    Close(CategoryIdArgs),
    /// Accept ballots again after closing.
    Reopen(CategoryIdArgs),
    /// Retire a closed category.
    Archive(CategoryIdArgs),
    /// Submit or replace a ballot.
    Vote(VoteArgs),
    /// Show the tally for a category.
    Results(ResultsArgs),
    /// Categories open for voting.
    Ballots,
    /// Categories whose results are visible to voters.
    Board,
}

/// Arguments for the lifecycle commands.
#[derive(Clone, Debug, Args)]
pub struct CategoryIdArgs {
    pub category_id: i64,
}

/// Arguments for `votigo vote`.
#[derive(Clone, Debug, Args)]
pub struct VoteArgs {
    pub category_id: i64,
    #[arg(long)]
    pub nickname: String,
    /// Option id; repeat for approval ballots.
    #[arg(long)]
    pub choice: Vec<i64>,
    /// Option id in preference order; `-` leaves a position blank.
    #[arg(long, allow_hyphen_values = true)]
    pub rank: Vec<String>,
}

/// Arguments for `votigo results`.
#[derive(Clone, Debug, Args)]
pub struct ResultsArgs {
    pub category_id: i64,
    /// Include the voter nicknames.
    #[arg(long)]
    pub voters: bool,
    /// Apply the voter visibility rule.
    #[arg(long)]
    pub public: bool,
}
