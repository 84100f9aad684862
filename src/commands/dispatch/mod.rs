//! Command dispatch logic for routemap

use std::time::Instant;

use crate::cli::Cli;
use routemap_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;

use command::Command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::load(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_map");

    cli.command.execute(&ctx)
}
