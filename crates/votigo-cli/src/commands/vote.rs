use anyhow::bail;
use votigo_engine::RawBallot;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VoteArgs;
use crate::commands::shared::parse::parse_rank_position;
use crate::context::AppContext;
use crate::output::output;

/// Handle `votigo vote`.
pub async fn handle(args: &VoteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ballot = build_ballot(&args.choice, &args.rank)?;
    let receipt = ctx
        .engine
        .submit(args.category_id, &args.nickname, ballot)
        .await?;
    output(&receipt, flags.format)
}

/// `--choice` feeds single and approval ballots, `--rank` feeds ranked ones.
fn build_ballot(choices: &[i64], ranks: &[String]) -> anyhow::Result<RawBallot> {
    match (choices.is_empty(), ranks.is_empty()) {
        (false, false) => bail!("use either --choice or --rank, not both"),
        (true, false) => {
            let positions = ranks
                .iter()
                .map(|raw| parse_rank_position(raw))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(RawBallot::Ranked(positions))
        }
        _ => Ok(RawBallot::Choices(choices.to_vec())),
    }
}
