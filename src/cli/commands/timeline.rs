//! sks timeline - Goals grouped by creation date, newest day first

use clap::Args;
use colored::Colorize;

use crate::cli::commands::{Ctx, with_spinner};
use crate::error::Result;
use crate::views::timeline::group_by_creation_date;

#[derive(Args, Debug)]
pub struct TimelineArgs {}

pub fn run(ctx: &Ctx, _args: &TimelineArgs) -> Result<()> {
    let goals = with_spinner(ctx, "Fetching goals...", || ctx.store.list_all())?;
    let buckets = group_by_creation_date(&goals);

    if ctx.robot {
        let json: Vec<serde_json::Value> = buckets
            .iter()
            .map(|bucket| {
                serde_json::json!({
                    "date": bucket.date.to_string(),
                    "skills": bucket.skills,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if buckets.is_empty() {
        println!("{}", "No learning activity yet".dimmed());
        return Ok(());
    }

    for bucket in &buckets {
        let count = bucket.skills.len();
        let plural = if count == 1 { "skill" } else { "skills" };
        println!(
            "{} ({count} {plural})",
            bucket.date.format("%A, %B %d, %Y").to_string().bold()
        );
        for skill in &bucket.skills {
            println!(
                "  {} - {} on {} ({}, {:.1}h)",
                skill.skill_name,
                skill.resource_type,
                skill.platform,
                skill.progress_status,
                skill.hours_spent
            );
        }
        println!();
    }
    Ok(())
}
