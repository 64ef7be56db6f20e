//! sks insights - Recommendations and learning analytics

use clap::Args;
use colored::Colorize;

use crate::cli::commands::{Ctx, with_spinner};
use crate::error::Result;
use crate::views::insights;

#[derive(Args, Debug)]
pub struct InsightsArgs {}

pub fn run(ctx: &Ctx, _args: &InsightsArgs) -> Result<()> {
    let goals = with_spinner(ctx, "Fetching goals...", || ctx.store.list_all())?;
    let insights = insights::compute(&goals);

    if ctx.robot {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!("{}", "Personalized Recommendations".bold());
    for recommendation in &insights.recommendations {
        println!("  - {recommendation}");
    }

    println!();
    println!("{}", "Learning Analytics".bold());
    println!("  Total learning hours    {:.1}", insights.analytics.total_hours);
    println!(
        "  Average difficulty      {}",
        insights.analytics.avg_difficulty_display()
    );
    println!(
        "  Most active category    {}",
        insights.analytics.category_display()
    );
    println!("  Learning streak         {} days", insights.analytics.streak_days);
    Ok(())
}
