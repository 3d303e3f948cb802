use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Leaderboard;
use crate::error::LeaderboardError;

pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.txt";

/// Reads and overwrites the leaderboard file.
///
/// Every call opens the file, reads or writes it completely, and closes it.
/// Nothing is cached between calls and concurrent writers are not guarded
/// against: the last save wins.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LeaderboardStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the leaderboard. A missing file or unreadable content yields an
    /// empty leaderboard.
    pub fn load(&self) -> Result<Leaderboard, LeaderboardError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no leaderboard file yet");
                return Ok(Leaderboard::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::debug!(path = %self.path.display(), "leaderboard is not UTF-8, starting empty");
                return Ok(Leaderboard::new());
            }
            Err(e) => {
                return Err(LeaderboardError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(board) => Ok(board),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "discarding unreadable leaderboard");
                Ok(Leaderboard::new())
            }
        }
    }

    /// Overwrite the file with `board`.
    pub fn save(&self, board: &Leaderboard) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string(board)?;
        fs::write(&self.path, json).map_err(|e| LeaderboardError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Load, add `score` to `name`, and write everything back. Returns the
    /// player's new total.
    pub fn record_score(&self, name: &str, score: i64) -> Result<i64, LeaderboardError> {
        let mut board = self.load()?;
        let total = board.add_score(name, score);
        self.save(&board)?;
        tracing::info!(name, score, total, "score saved");
        Ok(total)
    }
}
