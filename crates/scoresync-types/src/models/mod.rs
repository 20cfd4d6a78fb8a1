//! Core domain models for ScoreSync.
//!
//! This module contains the data structures shared by the local store, the
//! remote client and the presentation layer.

mod config;
mod difficulty;
mod leaderboard;
mod record;
mod sync;

pub use config::{RemoteConfig, ScoreSyncConfig};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use leaderboard::{LeaderboardEntry, LeaderboardState};
pub use record::{NewScoreRecord, ScoreRecord, SubmitScore};
pub use sync::SweepReport;
