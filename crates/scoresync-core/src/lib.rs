//! # ScoreSync Core
//!
//! Keeps a device's game results durable while offline and reconciles them
//! with a remote leaderboard.
//!
//! ## Architecture
//!
//! ```text
//! scoresync-core/src/modules/
//! ├── record_store/      # SQLite-backed local records (always writable)
//! ├── reconciler/        # Sync sweeps: push unsynced records, mark synced
//! ├── leaderboard_cache/ # Last fetched top-N plus loading/error status
//! ├── service/           # ScoreService facade used by the game front-end
//! ├── config.rs          # JSON config in the data dir, env overrides
//! └── logger.rs          # tracing subscriber setup
//! ```
//!
//! The local store is the source of truth for "your best score". The remote
//! leaderboard is only ever read into the in-memory cache.

#![allow(
    clippy::significant_drop_tightening,
    reason = "Mutex guards around the SQLite connection are held for the whole statement"
)]
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::assertions_on_result_states
    )
)]

pub mod error;
pub mod modules;
pub mod utils;

#[cfg(test)]
mod test_helpers;

pub use error::{AppError, AppResult};
pub use modules::leaderboard_cache::LeaderboardCache;
pub use modules::reconciler::SyncReconciler;
pub use modules::record_store::{RecordStore, StoreError, StoreResult};
pub use modules::service::ScoreService;
