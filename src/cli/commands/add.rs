//! sks add - Create a new learning goal

use clap::Args;
use colored::Colorize;

use crate::cli::commands::{Ctx, with_spinner};
use crate::error::Result;
use crate::model::NewGoal;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Skill name (e.g. "React Basics")
    #[arg(long, short = 'n')]
    pub name: String,

    /// Resource type: course, video, article, book, tutorial, certification
    #[arg(long, short = 't', default_value = "course")]
    pub resource_type: String,

    /// Platform (e.g. Udemy, YouTube, Coursera)
    #[arg(long, short = 'p')]
    pub platform: String,

    /// Initial status: started, in-progress, completed
    #[arg(long, short = 's', default_value = "started")]
    pub status: String,

    /// Initial hours spent
    #[arg(long, default_value_t = 0.0)]
    pub hours: f64,

    /// Difficulty rating 1-5
    #[arg(long, short = 'd', default_value_t = 1)]
    pub difficulty: u8,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

pub fn run(ctx: &Ctx, args: &AddArgs) -> Result<()> {
    let goal = NewGoal {
        skill_name: args.name.clone(),
        resource_type: args.resource_type.parse()?,
        platform: args.platform.clone(),
        progress_status: args.status.parse()?,
        hours_spent: args.hours,
        notes: args.notes.clone(),
        difficulty_rating: args.difficulty,
    };
    goal.validate()?;

    let created = with_spinner(ctx, "Adding goal...", || ctx.store.create(&goal))?;

    if ctx.robot {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else if !ctx.quiet {
        println!(
            "Added {} (id {}, {} on {})",
            created.skill_name.bold(),
            created.id,
            created.resource_type,
            created.platform
        );
    }
    Ok(())
}
