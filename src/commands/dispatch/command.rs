//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{network, report, routes};
use routemap_core::bail_invalid;
use routemap_core::config::RouteConfig;
use routemap_core::error::Result;
use routemap_core::graph::Graph;
use routemap_core::sample::sample_graph;
use routemap_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RouteConfig,
    pub graph: Graph,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve configuration and load the map the command will query.
    ///
    /// `--map` beats the config file's `map`, which beats the bundled sample.
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config = RouteConfig::discover(cli.config.as_deref(), &cwd)?;

        let graph = match cli.map.as_ref().or(config.map.as_ref()) {
            Some(path) => Graph::load_json(path)?,
            None => sample_graph()?,
        };

        Ok(Self {
            cli,
            config,
            graph,
            start,
        })
    }

    /// Threshold from the flag, else from config; must be positive
    pub fn max_distance(&self, flag: Option<f64>) -> Result<f64> {
        let value = flag.unwrap_or(self.config.max_distance);
        if !(value.is_finite() && value > 0.0) {
            bail_invalid!("max-distance", value);
        }
        Ok(value)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Shortest { from, to } => routes::handle_shortest(ctx, from, to),

            Commands::Connected { method } => {
                let methods = match method {
                    Some(method) => method.methods(),
                    None => vec![ctx.config.connectivity],
                };
                network::handle_connected(ctx, &methods)
            }

            Commands::ShortConnections { max_distance } => {
                network::handle_short_connections(ctx, ctx.max_distance(*max_distance)?)
            }

            Commands::Routes { from, to } => routes::handle_routes(ctx, from, to),

            Commands::Longest { from, to, strategy } => {
                let strategy = strategy
                    .map(Into::into)
                    .unwrap_or(ctx.config.longest_path);
                routes::handle_longest(ctx, from, to, strategy)
            }

            Commands::Neighbors { locality } => network::handle_neighbors(ctx, locality),

            Commands::Nodes => network::handle_nodes(ctx),

            Commands::Report { max_distance } => {
                report::handle_report(ctx, ctx.max_distance(*max_distance)?)
            }
        };

        trace_time!(ctx.start, "execute");
        result
    }
}
