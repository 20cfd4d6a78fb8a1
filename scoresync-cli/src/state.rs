//! Composition root: one store, one client, one service per process.

use anyhow::{Context, Result};
use scoresync_client::LeaderboardClient;
use scoresync_core::{RecordStore, ScoreService};
use scoresync_types::ScoreSyncConfig;
use std::path::Path;
use std::sync::Arc;

pub struct AppState {
    pub config: ScoreSyncConfig,
    pub service: ScoreService,
}

impl AppState {
    pub fn build(data_dir: &Path) -> Result<Self> {
        let config = scoresync_core::modules::config::load_config(data_dir)
            .context("Failed to load configuration")?;

        let db_path = data_dir.join(&config.database_file);
        let store = RecordStore::open(&db_path)
            .with_context(|| format!("Failed to open record store at {}", db_path.display()))?;
        let client = LeaderboardClient::new(&config.remote)
            .context("Failed to build leaderboard client")?;

        tracing::debug!(
            db = %db_path.display(),
            remote = %client.table_url(),
            "Application state initialized"
        );

        let service = ScoreService::new(store, Arc::new(client), &config);
        Ok(Self { config, service })
    }
}
