//! Configuration for routemap
//!
//! Configuration is read from `routemap.toml`. Every field is optional; CLI
//! flags override whatever the file sets.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{Result, RouteError};

pub use types::{RouteConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION, DEFAULT_MAX_DISTANCE};

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RouteConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load `path` if given, else `routemap.toml` in `dir` if present, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values no query can use
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            bail_invalid!("max_distance", self.max_distance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ConnectivityMethod, LongestPathStrategy};
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RouteConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.max_distance, 15.0);
        assert_eq!(config.longest_path, LongestPathStrategy::Exact);
        assert_eq!(config.connectivity, ConnectivityMethod::Dfs);
        assert!(config.map.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routemap.toml");

        let config = RouteConfig {
            max_distance: 20.0,
            longest_path: LongestPathStrategy::NodeMemo,
            connectivity: ConnectivityMethod::Bfs,
            map: Some(dir.path().join("map.json")),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = RouteConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routemap.toml");
        fs::write(&path, "longest_path = \"node-memo\"\n").unwrap();

        let loaded = RouteConfig::load(&path).unwrap();
        assert_eq!(loaded.longest_path, LongestPathStrategy::NodeMemo);
        assert_eq!(loaded.max_distance, DEFAULT_MAX_DISTANCE);
        assert_eq!(loaded.connectivity, ConnectivityMethod::Dfs);
    }

    #[test]
    fn test_invalid_max_distance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routemap.toml");
        fs::write(&path, "max_distance = -4.0\n").unwrap();

        let err = RouteConfig::load(&path).unwrap_err();
        assert!(matches!(err, RouteError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_strategy_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routemap.toml");
        fs::write(&path, "longest_path = \"greedy\"\n").unwrap();

        let err = RouteConfig::load(&path).unwrap_err();
        assert!(matches!(err, RouteError::Toml(_)));
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(
            RouteConfig::discover(None, dir.path()).unwrap(),
            RouteConfig::default()
        );

        fs::write(dir.path().join(CONFIG_FILE_NAME), "max_distance = 9.5\n").unwrap();
        let found = RouteConfig::discover(None, dir.path()).unwrap();
        assert_eq!(found.max_distance, 9.5);

        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "max_distance = 3.0\n").unwrap();
        let loaded = RouteConfig::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(loaded.max_distance, 3.0);
    }
}
