//! sks delete - Delete a goal

use std::io::{self, BufRead, Write};

use clap::Args;
use colored::Colorize;

use crate::cli::commands::{Ctx, with_spinner};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Goal id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(ctx: &Ctx, args: &DeleteArgs) -> Result<()> {
    if !args.yes && !ctx.robot && !confirm(args.id)? {
        if !ctx.quiet {
            println!("Aborted");
        }
        return Ok(());
    }

    with_spinner(ctx, "Deleting goal...", || ctx.store.delete(args.id))?;

    if ctx.robot {
        println!("{}", serde_json::json!({ "deleted": args.id }));
    } else if !ctx.quiet {
        println!("Deleted goal {}", args.id.to_string().bold());
    }
    Ok(())
}

fn confirm(id: i64) -> Result<bool> {
    print!("Delete goal {id}? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
