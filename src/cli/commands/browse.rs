//! sks browse - Interactive TUI

use clap::Args;

use crate::cli::commands::Ctx;
use crate::controller::App;
use crate::error::Result;
use crate::tui;

#[derive(Args, Debug)]
pub struct BrowseArgs {}

pub fn run(ctx: &Ctx, _args: &BrowseArgs) -> Result<()> {
    let app = App::new(ctx.store.clone());
    tui::run(app)
}
