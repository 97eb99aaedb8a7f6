use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ARENA_CONFIG_YAML: &str = include_str!("../config/arena.default.yaml");

/// Arena run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Rounds per match; every round plays two games with sides swapped.
    pub rounds: usize,
    /// Seed for every randomized player and selector in the run.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            rounds: 1000,
            seed: 7,
        }
    }
}

impl ArenaConfig {
    /// Parse an arena config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an arena config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_ARENA_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, ConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::Invalid(
                "rounds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for loading and validating `ArenaConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid arena config: {0}")]
    Invalid(String),
}
