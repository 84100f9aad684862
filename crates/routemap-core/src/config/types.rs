//! Configuration type definitions

use crate::graph::{ConnectivityMethod, LongestPathStrategy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default threshold for short-connection queries, in km
pub const DEFAULT_MAX_DISTANCE: f64 = 15.0;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "routemap.toml";

/// Route query configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Threshold for `short-connections` when no flag is given
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,

    /// Memo strategy for longest-route queries
    #[serde(default)]
    pub longest_path: LongestPathStrategy,

    /// Traversal used by connectivity checks
    #[serde(default)]
    pub connectivity: ConnectivityMethod,

    /// JSON adjacency map to load instead of the bundled sample (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<PathBuf>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE
}

impl Default for RouteConfig {
    fn default() -> Self {
        RouteConfig {
            version: CONFIG_FORMAT_VERSION,
            max_distance: DEFAULT_MAX_DISTANCE,
            longest_path: LongestPathStrategy::default(),
            connectivity: ConnectivityMethod::default(),
            map: None,
        }
    }
}
