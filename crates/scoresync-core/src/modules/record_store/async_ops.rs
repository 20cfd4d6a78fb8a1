//! Async wrappers for blocking store operations.

use scoresync_types::{NewScoreRecord, ScoreRecord};

use super::{RecordStore, StoreError, StoreResult};

impl RecordStore {
    async fn run_blocking<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&RecordStore) -> StoreResult<T> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| StoreError::TaskJoin(e.to_string()))?
    }

    pub async fn insert_async(&self, record: NewScoreRecord) -> StoreResult<i64> {
        self.run_blocking(move |store| store.insert(&record)).await
    }

    pub async fn mark_synced_async(&self, id: i64) -> StoreResult<bool> {
        self.run_blocking(move |store| store.mark_synced(id)).await
    }

    pub async fn unsynced_records_async(&self) -> StoreResult<Vec<ScoreRecord>> {
        self.run_blocking(RecordStore::unsynced_records).await
    }

    pub async fn unsynced_count_async(&self) -> StoreResult<usize> {
        self.run_blocking(RecordStore::unsynced_count).await
    }

    pub async fn max_score_async(&self) -> StoreResult<Option<u32>> {
        self.run_blocking(RecordStore::max_score).await
    }

    pub async fn top_local_async(&self, limit: usize) -> StoreResult<Vec<ScoreRecord>> {
        self.run_blocking(move |store| store.top_local(limit)).await
    }

    pub async fn clear_all_async(&self) -> StoreResult<usize> {
        self.run_blocking(RecordStore::clear_all).await
    }
}
