//! Pushes locally recorded, unsynced results to the remote leaderboard.
//!
//! A sweep takes a snapshot of unsynced records and submits each one in
//! insertion order. A failed submission leaves that record unsynced for the
//! next sweep and never stops the rest of the snapshot. Delivery is
//! at-least-once: if the remote accepted a record but the local flag update
//! failed, the next sweep submits it again.


use scoresync_client::LeaderboardApi;
use scoresync_types::SweepReport;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::AppResult;
use crate::modules::record_store::RecordStore;

pub struct SyncReconciler {
    store: RecordStore,
    api: Arc<dyn LeaderboardApi>,
    /// One sweep at a time; a queued sweep re-reads the store when it runs.
    sweep_gate: Mutex<()>,
}

impl SyncReconciler {
    pub fn new(store: RecordStore, api: Arc<dyn LeaderboardApi>) -> Self {
        Self { store, api, sweep_gate: Mutex::new(()) }
    }

    /// Run one sweep over the records unsynced at the time it starts.
    ///
    /// Only a failure to read the snapshot is returned as `Err`. Storage
    /// faults while marking individual records are collected in
    /// [`SweepReport::storage_faults`].
    pub async fn sweep(&self) -> AppResult<SweepReport> {
        let _gate = self.sweep_gate.lock().await;

        let snapshot = self.store.unsynced_records_async().await?;
        let mut report = SweepReport { attempted: snapshot.len(), ..SweepReport::default() };
        if snapshot.is_empty() {
            tracing::debug!("Sync sweep: nothing to push");
            return Ok(report);
        }

        for record in snapshot {
            match self.api.submit(&record.to_submission()).await {
                Ok(remote) => match self.store.mark_synced_async(record.id).await {
                    Ok(flipped) => {
                        report.synced += 1;
                        tracing::debug!(
                            record_id = record.id,
                            remote_id = ?remote.map(|entry| entry.id),
                            flipped,
                            "Score synced"
                        );
                    },
                    Err(e) => {
                        tracing::error!(
                            record_id = record.id,
                            error = %e,
                            "Score accepted remotely but could not be marked synced"
                        );
                        report.storage_faults.push((record.id, e.to_string()));
                    },
                },
                Err(e) => {
                    report.network_failures += 1;
                    tracing::warn!(record_id = record.id, error = %e, "Failed to sync score");
                },
            }
        }

        tracing::info!(
            attempted = report.attempted,
            synced = report.synced,
            network_failures = report.network_failures,
            storage_faults = report.storage_faults.len(),
            "Sync sweep finished"
        );
        Ok(report)
    }

    /// Start a sweep in the background. The outcome is only logged.
    pub fn spawn_sweep(self: &Arc<Self>) -> JoinHandle<()> {
        let reconciler = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = reconciler.sweep().await {
                tracing::error!(error = %e, "Background sync sweep failed");
            }
        })
    }
}
