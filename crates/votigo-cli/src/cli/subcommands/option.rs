use clap::Subcommand;

/// Option commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OptionCommands {
    /// Add an option to a category.
    Add { category_id: i64, name: String },
    /// List a category with its options.
    List { category_id: i64 },
    /// Remove an option and any selections of it.
    Remove { option_id: i64 },
}
