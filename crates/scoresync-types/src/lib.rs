//! # ScoreSync Types
//!
//! Core records, models, and error definitions for ScoreSync.
//!
//! This crate provides the foundational type system shared by the store,
//! the remote client and the front-ends:
//!
//! - **`error`** - Typed configuration errors
//! - **`models`** - Score records, leaderboard entries, cache state, config
//!
//! ## Architecture Role
//!
//! `scoresync-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!               scoresync-types (this crate)
//!                       │
//!        ┌──────────────┴──────────────┐
//!        ▼                             ▼
//! scoresync-client               scoresync-core
//!        │                             │
//!        └──────────────┬──────────────┘
//!                       ▼
//!                 scoresync-cli
//! ```

pub mod error;
pub mod models;

pub use error::ConfigError;

pub use models::{
    Difficulty, LeaderboardEntry, LeaderboardState, NewScoreRecord, ParseDifficultyError,
    RemoteConfig, ScoreRecord, ScoreSyncConfig, SubmitScore, SweepReport,
};
