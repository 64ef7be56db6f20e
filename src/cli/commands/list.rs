//! sks list - List goals, optionally filtered by status

use clap::Args;
use colored::Colorize;

use crate::cli::commands::{Ctx, with_spinner};
use crate::error::Result;
use crate::model::{ProgressStatus, SkillRecord};
use crate::views::filter::{self, StatusFilter};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by status: all, started, in-progress, completed
    #[arg(long, short = 's', default_value = "all")]
    pub status: String,
}

pub fn run(ctx: &Ctx, args: &ListArgs) -> Result<()> {
    let status_filter: StatusFilter = args.status.parse()?;
    let goals = with_spinner(ctx, "Fetching goals...", || ctx.store.list_all())?;
    let visible = filter::by_status(&goals, status_filter);

    if ctx.robot {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("{}", "No goals found".dimmed());
        println!();
        println!("Add one with: sks add --name \"React Basics\" --platform Udemy");
        return Ok(());
    }

    println!(
        "{:>5} {:28} {:14} {:18} {:12} {:>6} {:>5}",
        "ID".bold(),
        "SKILL".bold(),
        "TYPE".bold(),
        "PLATFORM".bold(),
        "STATUS".bold(),
        "HOURS".bold(),
        "DIFF".bold()
    );
    println!("{}", "─".repeat(94).dimmed());

    for goal in &visible {
        println!(
            "{:>5} {:28} {:14} {:18} {:12} {:>6.1} {:>5}",
            goal.id,
            truncate(&goal.skill_name, 28),
            goal.resource_type.to_string(),
            truncate(&goal.platform, 18),
            status_colored(goal),
            goal.hours_spent,
            "*".repeat(goal.difficulty_rating as usize),
        );
    }

    println!();
    println!(
        "{} of {} goals ({})",
        visible.len(),
        goals.len(),
        status_filter.label()
    );
    Ok(())
}

fn status_colored(goal: &SkillRecord) -> String {
    let label = goal.progress_status.as_str();
    match goal.progress_status {
        ProgressStatus::Started => label.yellow().to_string(),
        ProgressStatus::InProgress => label.cyan().to_string(),
        ProgressStatus::Completed => label.green().to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}
