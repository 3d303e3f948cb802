use std::path::PathBuf;

use crate::game::{Move, MoveError};

/// Errors that can occur while reading or writing the leaderboard file.
///
/// A missing or unparseable file is not an error; both load as an empty
/// leaderboard.
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("failed to read leaderboard from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write leaderboard to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode leaderboard: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that end an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{player} selected illegal move {mv}: {source}")]
    IllegalMove {
        player: &'static str,
        mv: Move,
        source: MoveError,
    },

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("leaderboard error: {0}")]
    Leaderboard(#[from] LeaderboardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
