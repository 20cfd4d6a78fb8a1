//! Application configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ConfigError;

/// Connection settings for the remote leaderboard service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RemoteConfig {
    /// REST root, e.g. `https://xyz.supabase.co/rest/v1/`
    #[validate(url)]
    pub base_url: String,
    /// Static credential sent as `apikey` and bearer token
    #[serde(default)]
    pub api_key: String,
    /// Table holding the scores
    #[serde(default = "default_table")]
    #[validate(length(min = 1_u64))]
    pub table: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1_u64, max = 300_u64))]
    pub timeout_secs: u64,
}

fn default_table() -> String {
    "high_scores".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:54321/rest/v1/".to_string(),
            api_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level ScoreSync configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ScoreSyncConfig {
    /// Remote leaderboard settings
    #[serde(default)]
    #[validate(nested)]
    pub remote: RemoteConfig,
    /// Number of entries fetched for the leaderboard view
    #[serde(default = "default_leaderboard_size")]
    #[validate(range(min = 1_usize, max = 100_usize))]
    pub leaderboard_size: usize,
    /// Name used when the player leaves the name blank
    #[serde(default = "default_player_name")]
    #[validate(length(min = 1_u64))]
    pub default_player_name: String,
    /// SQLite file name inside the data directory
    #[serde(default = "default_database_file")]
    #[validate(length(min = 1_u64))]
    pub database_file: String,
}

const fn default_leaderboard_size() -> usize {
    10
}

fn default_player_name() -> String {
    "Anonymous".to_string()
}

fn default_database_file() -> String {
    "scoresync.db".to_string()
}

impl Default for ScoreSyncConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            leaderboard_size: default_leaderboard_size(),
            default_player_name: default_player_name(),
            database_file: default_database_file(),
        }
    }
}

impl ScoreSyncConfig {
    /// Run field validation, mapping failures to [`ConfigError`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map_err(|e| ConfigError::ValidationError {
            field: "config".to_string(),
            message: e.to_string(),
        })?;
        Ok(self)
    }
}
