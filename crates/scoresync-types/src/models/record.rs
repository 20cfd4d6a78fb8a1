//! Locally persisted score records.

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// One finished game, as stored on the device.
///
/// Only `synced` ever changes after insertion, and only from `false` to
/// `true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRecord {
    /// Local auto-increment id, never reused
    pub id: i64,
    /// Display name, never blank
    pub player_name: String,
    /// Final score
    pub score: u32,
    /// Difficulty the game was played at
    pub difficulty: Difficulty,
    /// Device-local creation time, milliseconds since epoch
    pub created_at: i64,
    /// Whether the remote leaderboard acknowledged this record
    pub synced: bool,
}

impl ScoreRecord {
    /// Payload for submitting this record to the remote leaderboard.
    pub fn to_submission(&self) -> SubmitScore {
        SubmitScore {
            player_name: self.player_name.clone(),
            score: self.score,
            difficulty: self.difficulty,
        }
    }
}

/// A record that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScoreRecord {
    pub player_name: String,
    pub score: u32,
    pub difficulty: Difficulty,
    pub created_at: i64,
}

impl NewScoreRecord {
    /// Build a record stamped with the current time.
    pub fn now(player_name: impl Into<String>, score: u32, difficulty: Difficulty) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            difficulty,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Body of a remote create request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitScore {
    pub player_name: String,
    pub score: u32,
    pub difficulty: Difficulty,
}
