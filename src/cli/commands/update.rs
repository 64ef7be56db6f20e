//! sks update - Update a goal's progress

use clap::Args;
use colored::Colorize;

use crate::cli::commands::{Ctx, with_spinner};
use crate::error::{Result, SksError};
use crate::model::{GoalPatch, ProgressStatus};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Goal id
    pub id: i64,

    /// New status: started, in-progress, completed
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Total hours spent
    #[arg(long)]
    pub hours: Option<f64>,

    /// Replace the notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Difficulty rating 1-5
    #[arg(long, short = 'd')]
    pub difficulty: Option<u8>,
}

pub fn run(ctx: &Ctx, args: &UpdateArgs) -> Result<()> {
    let patch = GoalPatch {
        progress_status: args.status.as_deref().map(str::parse::<ProgressStatus>).transpose()?,
        hours_spent: args.hours,
        notes: args.notes.clone(),
        difficulty_rating: args.difficulty,
    };
    if patch.is_empty() {
        return Err(SksError::ValidationFailed(
            "nothing to update; pass at least one of --status, --hours, --notes, --difficulty"
                .to_string(),
        ));
    }
    patch.validate()?;

    let updated = with_spinner(ctx, "Updating goal...", || ctx.store.update(args.id, &patch))?;

    if ctx.robot {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else if !ctx.quiet {
        println!(
            "Updated {} (status {}, {:.1}h)",
            updated.skill_name.bold(),
            updated.progress_status,
            updated.hours_spent
        );
    }
    Ok(())
}
