use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::leaderboard::DEFAULT_LEADERBOARD_FILE;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Where the leaderboard lives.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub path: PathBuf,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        LeaderboardConfig {
            path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
        }
    }
}

/// Settings for the computer opponent.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Fixed seed for the random source; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub leaderboard: LeaderboardConfig,
    pub computer: ComputerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leaderboard.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "leaderboard.path must not be empty".into(),
            ));
        }
        Ok(())
    }
}
