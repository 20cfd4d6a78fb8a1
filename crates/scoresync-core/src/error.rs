//! Unified error types for ScoreSync Core.

use scoresync_client::ClientError;
use scoresync_types::ConfigError;
use thiserror::Error;

use crate::modules::record_store::StoreError;

/// Main error type for all ScoreSync operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Local record store failed (disk full, corruption, closed database).
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Remote leaderboard call failed.
    #[error("Network error: {0}")]
    Network(#[from] ClientError),

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for ScoreSync operations.
pub type AppResult<T> = Result<T, AppError>;
