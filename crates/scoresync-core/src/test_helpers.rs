//! In-process leaderboard fakes shared by unit tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use scoresync_client::{ClientError, LeaderboardApi};
use scoresync_types::{LeaderboardEntry, SubmitScore};
use std::collections::HashSet;
use std::future::Future;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

pub(crate) fn entry(id: i64, name: &str, score: u32) -> LeaderboardEntry {
    LeaderboardEntry {
        id,
        player_name: name.to_string(),
        score,
        difficulty: scoresync_types::Difficulty::Normal,
        created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
    }
}

fn unavailable() -> ClientError {
    ClientError::Status { status: 503, message: "service unavailable".to_string() }
}

/// Scripted remote: fails submissions for chosen scores, counts fetches,
/// optionally parks fetches until released.
#[derive(Default)]
pub(crate) struct FakeLeaderboard {
    submitted: Mutex<Vec<SubmitScore>>,
    failing_scores: Mutex<HashSet<u32>>,
    offline: Mutex<bool>,
    leaderboard: Mutex<Vec<LeaderboardEntry>>,
    fetch_fails: Mutex<bool>,
    fetch_calls: AtomicUsize,
    fetch_gate: Mutex<Option<Arc<Notify>>>,
    on_submit: Mutex<Option<SubmitHook>>,
    next_id: AtomicI64,
}

type SubmitHook = Box<dyn Fn() + Send + Sync>;

impl FakeLeaderboard {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn fail_score(&self, score: u32) {
        self.failing_scores.lock().insert(score);
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        *self.offline.lock() = offline;
    }

    pub(crate) fn set_leaderboard(&self, entries: Vec<LeaderboardEntry>) {
        *self.leaderboard.lock() = entries;
    }

    pub(crate) fn set_fetch_fails(&self, fails: bool) {
        *self.fetch_fails.lock() = fails;
    }

    /// Park every fetch until the returned handle is notified.
    pub(crate) fn gate_fetches(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.fetch_gate.lock() = Some(Arc::clone(&gate));
        gate
    }

    /// Run `hook` inside every submit, before it answers.
    pub(crate) fn on_submit(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_submit.lock() = Some(Box::new(hook));
    }

    pub(crate) fn submitted_scores(&self) -> Vec<u32> {
        self.submitted.lock().iter().map(|s| s.score).collect()
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeaderboardApi for FakeLeaderboard {
    async fn submit(
        &self,
        score: &SubmitScore,
    ) -> Result<Option<LeaderboardEntry>, ClientError> {
        self.submitted.lock().push(score.clone());
        if let Some(hook) = self.on_submit.lock().as_ref() {
            hook();
        }
        if *self.offline.lock() || self.failing_scores.lock().contains(&score.score) {
            return Err(unavailable());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Some(LeaderboardEntry {
            id,
            player_name: score.player_name.clone(),
            score: score.score,
            difficulty: score.difficulty,
            created_at: Utc::now(),
        }))
    }

    async fn fetch_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ClientError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.fetch_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if *self.fetch_fails.lock() {
            return Err(unavailable());
        }
        let mut entries = self.leaderboard.lock().clone();
        entries.sort_by(LeaderboardEntry::rank_cmp);
        entries.truncate(limit);
        Ok(entries)
    }
}

/// Poll `check` until it returns true or two seconds pass.
pub(crate) async fn wait_until<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while tokio::time::Instant::now() < deadline {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
