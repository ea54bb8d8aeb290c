use clap::Subcommand;

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List categories.
    List {
        /// Include archived categories.
        #[arg(long)]
        all: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a draft category.
    Create {
        name: String,
        /// single, ranked, or approval
        #[arg(long = "type", default_value = "single")]
        vote_type: String,
        #[arg(long)]
        max_rank: Option<i64>,
        /// live or after_close (defaults to `general.default_show_results`)
        #[arg(long)]
        show_results: Option<String>,
    },
    /// Edit a category at any status.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        vote_type: Option<String>,
        #[arg(long)]
        max_rank: Option<i64>,
        #[arg(long)]
        show_results: Option<String>,
    },
    /// Delete a category with its options and ballots.
    Delete { id: i64 },
}
