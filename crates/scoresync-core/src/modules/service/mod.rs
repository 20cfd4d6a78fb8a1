//! Single entry point for the game front-end.
//!
//! Hides the local/remote split: results are written to the local store,
//! pushed to the remote leaderboard in the background, and the leaderboard
//! view comes from the in-memory cache.

#[cfg(test)]
mod tests;

use scoresync_client::LeaderboardApi;
use scoresync_types::{
    Difficulty, LeaderboardState, NewScoreRecord, ScoreRecord, ScoreSyncConfig, SweepReport,
};
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::AppResult;
use crate::modules::leaderboard_cache::LeaderboardCache;
use crate::modules::reconciler::SyncReconciler;
use crate::modules::record_store::RecordStore;

pub struct ScoreService {
    store: RecordStore,
    reconciler: Arc<SyncReconciler>,
    leaderboard: LeaderboardCache,
    default_player_name: String,
}

impl ScoreService {
    pub fn new(store: RecordStore, api: Arc<dyn LeaderboardApi>, config: &ScoreSyncConfig) -> Self {
        let reconciler = Arc::new(SyncReconciler::new(store.clone(), Arc::clone(&api)));
        let leaderboard = LeaderboardCache::new(api, config.leaderboard_size);
        Self {
            store,
            reconciler,
            leaderboard,
            default_player_name: config.default_player_name.clone(),
        }
    }

    /// Call once when the app comes up: kicks off a background sweep for
    /// anything left unsynced by earlier sessions and returns the best
    /// local score.
    pub async fn start_session(&self) -> AppResult<u32> {
        let best = self.best_local_score().await?;
        drop(self.reconciler.spawn_sweep());
        Ok(best)
    }

    /// Persist a finished game.
    ///
    /// Non-positive scores are ignored and return `Ok(None)`. A blank name is
    /// replaced by the configured placeholder. The local write completes
    /// before this returns; the remote push runs detached.
    pub async fn record_result(
        &self,
        player_name: &str,
        score: i64,
        difficulty: Difficulty,
    ) -> AppResult<Option<i64>> {
        if score <= 0 {
            tracing::debug!(score, "Ignoring non-positive score");
            return Ok(None);
        }
        let score = u32::try_from(score).unwrap_or(u32::MAX);
        let record = NewScoreRecord::now(self.normalize_name(player_name), score, difficulty);

        let id = match self.store.insert_async(record).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(score, error = %e, "Failed to save score locally");
                return Err(e.into());
            },
        };
        tracing::info!(record_id = id, score, %difficulty, "Score saved locally");

        drop(self.reconciler.spawn_sweep());
        Ok(Some(id))
    }

    /// "Your high score": highest local score, zero when nothing is stored.
    /// Never derived from the remote leaderboard.
    pub async fn best_local_score(&self) -> AppResult<u32> {
        Ok(self.store.max_score_async().await?.unwrap_or(0))
    }

    pub fn leaderboard_view(&self) -> LeaderboardState {
        self.leaderboard.state()
    }

    pub fn subscribe_leaderboard(&self) -> watch::Receiver<LeaderboardState> {
        self.leaderboard.subscribe()
    }

    /// Refresh the leaderboard and wait for the result.
    pub async fn refresh_leaderboard(&self) -> LeaderboardState {
        self.leaderboard.refresh().await
    }

    /// Start a refresh without waiting; observers see `Loading` right away.
    pub fn request_leaderboard_refresh(&self) -> bool {
        self.leaderboard.begin_refresh()
    }

    /// Delete every local record. The remote leaderboard is untouched.
    pub async fn reset_stats(&self) -> AppResult<usize> {
        match self.store.clear_all_async().await {
            Ok(deleted) => {
                tracing::info!(deleted, "Local stats reset");
                Ok(deleted)
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to reset local stats");
                Err(e.into())
            },
        }
    }

    /// Run a sweep now and wait for its report.
    pub async fn sync_now(&self) -> AppResult<SweepReport> {
        self.reconciler.sweep().await
    }

    pub async fn pending_sync_count(&self) -> AppResult<usize> {
        Ok(self.store.unsynced_count_async().await?)
    }

    pub async fn local_top(&self, limit: usize) -> AppResult<Vec<ScoreRecord>> {
        Ok(self.store.top_local_async(limit).await?)
    }

    fn normalize_name(&self, player_name: &str) -> String {
        let trimmed = player_name.trim();
        if trimmed.is_empty() {
            self.default_player_name.clone()
        } else {
            trimmed.to_string()
        }
    }
}
