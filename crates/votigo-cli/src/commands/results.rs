use votigo_core::responses::{ResultsResponse, Tally};
use votigo_engine::ResultsView;

use crate::cli::root_commands::ResultsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_tally};

/// Handle `votigo results`.
pub async fn handle(
    args: &ResultsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let view = if args.public {
        ResultsView::Public
    } else {
        ResultsView::Admin
    };
    let results = ctx
        .engine
        .results(args.category_id, view, args.voters)
        .await?;

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_results_table(&results));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&results, flags.format),
    }
}

/// Heading line, the ranking table, then the voter list if requested.
fn render_results_table(results: &ResultsResponse) -> String {
    let category = &results.category;
    let mut sections = Vec::new();

    let heading = match results.vote_count {
        Some(count) => format!(
            "{} ({}, {}) - {count} voter{}",
            category.name,
            category.vote_type,
            category.status,
            if count == 1 { "" } else { "s" }
        ),
        None => format!("{} ({})", category.name, category.status),
    };
    sections.push(heading);

    match &results.tally {
        Some(tally @ Tally::Simple { .. }) => sections.push(render_tally(tally)),
        Some(tally @ Tally::Ranked { max_rank, .. }) => {
            sections.push(format!("points: rank 1 = {max_rank}"));
            sections.push(render_tally(tally));
        }
        None => sections.push(String::from("Results are not visible yet")),
    }

    if let Some(voters) = &results.voters {
        sections.push(format!("voters: {}", voters.join(", ")));
    }

    sections.join("\n")
}
