//! sks dashboard - Aggregate statistics
//!
//! Prefers the server's pre-aggregated summary; computes the same
//! numbers locally when the endpoint is missing or malformed.

use clap::Args;
use colored::Colorize;

use crate::cli::commands::{Ctx, with_spinner};
use crate::controller::fetch_payload;
use crate::error::Result;
use crate::views::dashboard::{self, DashboardStats};

#[derive(Args, Debug)]
pub struct DashboardArgs {}

pub fn run(ctx: &Ctx, _args: &DashboardArgs) -> Result<()> {
    let payload = with_spinner(ctx, "Fetching dashboard...", || {
        fetch_payload(ctx.store.as_ref())
    })?;

    let stats = payload.summary.as_ref().map_or_else(
        || dashboard::compute_stats(&payload.goals),
        |summary| dashboard::from_summary(summary, &payload.goals),
    );

    if ctx.robot {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_human(&stats);
    Ok(())
}

fn print_human(stats: &DashboardStats) {
    println!("{}", "Your Learning Dashboard".bold());
    println!();
    println!("  Total skills      {}", stats.total.to_string().bold());
    println!(
        "  Completed         {} ({}% completion rate)",
        stats.completed.to_string().green(),
        stats.completion_rate_pct
    );
    println!("  In progress       {}", stats.in_progress.to_string().cyan());
    println!("  Hours learned     {}", stats.total_hours.to_string().bold());

    if !stats.category_breakdown.is_empty() {
        println!();
        println!("{}", "By resource type".bold());
        for category in &stats.category_breakdown {
            println!("  {:14} {}", category.name, category.count);
        }
    }

    if stats.recent.is_empty() {
        println!();
        println!("{}", "No skills yet - add your first one with: sks add".dimmed());
    } else {
        println!();
        println!("{}", "Recently added".bold());
        for skill in &stats.recent {
            println!(
                "  {} ({} on {}, {:.1}h, {})",
                skill.skill_name,
                skill.resource_type,
                skill.platform,
                skill.hours_spent,
                skill.progress_status
            );
        }
    }
}
