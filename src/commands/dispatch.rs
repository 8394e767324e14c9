//! Command dispatch logic for verdict

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use verdict_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Judge { answer, result } => {
            commands::judge::execute(cli, answer, result, start)
        }
        Commands::Demo { answer, result } => commands::demo::execute(cli, answer, result),
    }
}
