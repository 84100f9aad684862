//! CLI argument parsing for routemap
//!
//! Global flags: --map, --config, --format, --quiet, --verbose, --log-level,
//! --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use routemap_core::graph::{ConnectivityMethod, LongestPathStrategy};

/// Output format for routemap commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Routemap - route queries over a map of localities
#[derive(Parser, Debug)]
#[command(name = "routemap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON adjacency map to load (defaults to the bundled sample map)
    #[arg(long, global = true, env = "ROUTEMAP_MAP")]
    pub map: Option<PathBuf>,

    /// Config file (defaults to ./routemap.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "routemap_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest route between two localities
    Shortest {
        /// Origin locality
        from: String,
        /// Destination locality
        to: String,
    },

    /// Check whether every locality can reach every other
    Connected {
        /// Traversal to use (defaults to the configured method)
        #[arg(long, value_enum)]
        method: Option<MethodArg>,
    },

    /// Localities whose every connection is shorter than a distance
    ShortConnections {
        /// Strict upper bound in km (defaults to the configured value)
        #[arg(long, allow_negative_numbers = true)]
        max_distance: Option<f64>,
    },

    /// Every route between two localities that repeats no locality
    Routes {
        /// Origin locality
        from: String,
        /// Destination locality
        to: String,
    },

    /// Longest route between two localities that repeats no locality
    Longest {
        /// Origin locality
        from: String,
        /// Destination locality
        to: String,
        /// Memo strategy (defaults to the configured strategy)
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },

    /// List the connections of a locality
    Neighbors {
        /// Locality name
        locality: String,
    },

    /// List every locality on the map
    Nodes,

    /// All-pairs shortest routes, short connections and connectivity
    Report {
        /// Threshold for the short-connections section
        #[arg(long, allow_negative_numbers = true)]
        max_distance: Option<f64>,
    },
}

/// Connectivity traversal selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Dfs,
    Bfs,
    /// Run both and report each
    Both,
}

impl MethodArg {
    /// Methods to run, in report order
    pub fn methods(self) -> Vec<ConnectivityMethod> {
        match self {
            MethodArg::Dfs => vec![ConnectivityMethod::Dfs],
            MethodArg::Bfs => vec![ConnectivityMethod::Bfs],
            MethodArg::Both => vec![ConnectivityMethod::Dfs, ConnectivityMethod::Bfs],
        }
    }
}

/// Longest-route strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Exact,
    NodeMemo,
}

impl From<StrategyArg> for LongestPathStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exact => LongestPathStrategy::Exact,
            StrategyArg::NodeMemo => LongestPathStrategy::NodeMemo,
        }
    }
}
