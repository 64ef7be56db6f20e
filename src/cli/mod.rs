//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod progress;

/// SkillStack - track personal learning goals from the terminal
#[derive(Parser, Debug)]
#[command(name = "sks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/skillstack/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively browse and manage goals (TUI)
    Browse(commands::browse::BrowseArgs),

    /// Add a new learning goal
    Add(commands::add::AddArgs),

    /// List goals, optionally filtered by status
    List(commands::list::ListArgs),

    /// Update a goal's progress
    Update(commands::update::UpdateArgs),

    /// Delete a goal
    Delete(commands::delete::DeleteArgs),

    /// Show aggregate dashboard statistics
    Dashboard(commands::dashboard::DashboardArgs),

    /// Show goals grouped by creation date
    Timeline(commands::timeline::TimelineArgs),

    /// Show recommendations and learning analytics
    Insights(commands::insights::InsightsArgs),
}
