//! Persisted name → cumulative score table.

mod scores;
mod store;

pub use scores::Leaderboard;
pub use store::{LeaderboardStore, DEFAULT_LEADERBOARD_FILE};
