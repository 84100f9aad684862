//! `routemap shortest`, `routemap routes` and `routemap longest`

mod human;
mod json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use routemap_core::error::Result;
use routemap_core::graph::LongestPathStrategy;

pub fn handle_shortest(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let result = ctx.graph.shortest_path(from, to)?;

    match ctx.cli.format {
        OutputFormat::Human => human::output_path(ctx.cli, &result),
        OutputFormat::Json => json::output_path(&result, None)?,
    }
    Ok(())
}

pub fn handle_routes(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let routes = ctx.graph.all_simple_paths(from, to)?;

    tracing::debug!(from, to, count = routes.len(), "routes");

    match ctx.cli.format {
        OutputFormat::Human => human::output_routes(ctx.cli, from, to, &routes),
        OutputFormat::Json => json::output_routes(from, to, &routes)?,
    }
    Ok(())
}

pub fn handle_longest(
    ctx: &CommandContext,
    from: &str,
    to: &str,
    strategy: LongestPathStrategy,
) -> Result<()> {
    let result = ctx.graph.longest_simple_path_with(from, to, strategy)?;

    match ctx.cli.format {
        OutputFormat::Human => human::output_path(ctx.cli, &result),
        OutputFormat::Json => json::output_path(&result, Some(strategy))?,
    }
    Ok(())
}
