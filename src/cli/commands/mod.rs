//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::sync::Arc;

use indicatif::ProgressBar;

use crate::cli::progress::network_spinner;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::controller::SharedStore;
use crate::error::Result;
use crate::store::HttpGoalStore;

pub mod add;
pub mod browse;
pub mod dashboard;
pub mod delete;
pub mod insights;
pub mod list;
pub mod timeline;
pub mod update;

/// Shared command context: config, the goal store, and output flags.
pub struct Ctx {
    pub config: Config,
    pub store: SharedStore,
    pub robot: bool,
    pub quiet: bool,
}

impl Ctx {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let store: SharedStore = Arc::new(HttpGoalStore::new(&config.api)?);
        Ok(Self {
            config,
            store,
            robot: cli.robot,
            quiet: cli.quiet,
        })
    }

    /// Spinner for the duration of a network call; suppressed in robot
    /// and quiet modes.
    #[must_use]
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.robot || self.quiet {
            None
        } else {
            Some(network_spinner(message))
        }
    }
}

pub fn run(ctx: &Ctx, command: &Commands) -> Result<()> {
    match command {
        Commands::Browse(args) => browse::run(ctx, args),
        Commands::Add(args) => add::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Update(args) => update::run(ctx, args),
        Commands::Delete(args) => delete::run(ctx, args),
        Commands::Dashboard(args) => dashboard::run(ctx, args),
        Commands::Timeline(args) => timeline::run(ctx, args),
        Commands::Insights(args) => insights::run(ctx, args),
    }
}

/// Run `f` with a spinner shown while it executes.
pub fn with_spinner<T>(ctx: &Ctx, message: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = ctx.spinner(message);
    let result = f();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result
}
