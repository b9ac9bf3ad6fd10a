//! Analysis configuration.
//!
//! Stored as JSON (`wordgraph.json`). Every field has a default, so a
//! partial file only overrides what it names.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "wordgraph.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PageRank damping factor.
    pub damping: f64,
    /// PageRank iteration cap.
    pub max_iterations: usize,
    /// PageRank convergence threshold, per node.
    pub tolerance: f64,
    /// Seed for text generation and random walks. Entropy when unset.
    pub seed: Option<u64>,
    /// File rewritten with the walk path after every step.
    pub walk_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            seed: None,
            walk_output: PathBuf::from("random_walk_result.txt"),
        }
    }
}

impl Config {
    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolves the effective config.
    ///
    /// An explicit path must exist. Otherwise `wordgraph.json` in `dir` is
    /// used if present, falling back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes this config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| CoreError::io(path, e))
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(CoreError::Config(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(CoreError::Config(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(CoreError::Config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "damping": 0.9, "seed": 7 }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.damping, 0.9);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.walk_output, PathBuf::from("random_walk_result.txt"));
    }

    #[test]
    fn test_save_then_discover() {
        let dir = tempdir().unwrap();
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };
        config.save(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();

        let found = Config::discover(None, dir.path()).unwrap();
        assert_eq!(found, config);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(Config::discover(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_rejects_bad_damping() {
        let config = Config {
            damping: 1.5,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let config = Config {
            max_iterations: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
