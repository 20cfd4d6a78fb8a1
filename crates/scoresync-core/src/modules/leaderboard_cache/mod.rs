//! In-memory view of the remote top-N leaderboard.
//!
//! The state lives in a `watch` channel so presentation code can observe
//! transitions. A refresh flips the state to `Loading` before any network
//! I/O and runs the fetch on a spawned task, so a dropped caller cannot
//! strand the cache in `Loading`. Refreshes requested while one is in flight
//! share its outcome instead of issuing another request.


use scoresync_client::LeaderboardApi;
use scoresync_types::LeaderboardState;
use std::sync::Arc;
use tokio::sync::watch;

pub struct LeaderboardCache {
    api: Arc<dyn LeaderboardApi>,
    limit: usize,
    state: Arc<watch::Sender<LeaderboardState>>,
}

impl LeaderboardCache {
    pub fn new(api: Arc<dyn LeaderboardApi>, limit: usize) -> Self {
        let (state, _) = watch::channel(LeaderboardState::Empty);
        Self { api, limit, state: Arc::new(state) }
    }

    /// Current state, without triggering a fetch.
    pub fn state(&self) -> LeaderboardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LeaderboardState> {
        self.state.subscribe()
    }

    /// Enter `Loading` and start a fetch unless one is already running.
    ///
    /// Returns `false` when the request was coalesced into an in-flight
    /// fetch. Must be called from within a Tokio runtime.
    pub fn begin_refresh(&self) -> bool {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = LeaderboardState::Loading;
            true
        });
        if !started {
            tracing::debug!("Leaderboard refresh already in flight, coalescing");
            return false;
        }

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let limit = self.limit;
        drop(tokio::spawn(async move {
            let next = match api.fetch_top(limit).await {
                Ok(entries) => {
                    tracing::info!(count = entries.len(), "Leaderboard refreshed");
                    LeaderboardState::Ready(entries)
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to fetch leaderboard");
                    LeaderboardState::Failed(e.to_string())
                },
            };
            state.send_replace(next);
        }));
        true
    }

    /// Refresh and wait for the outcome (own fetch or the coalesced one).
    pub async fn refresh(&self) -> LeaderboardState {
        let mut rx = self.state.subscribe();
        self.begin_refresh();
        let outcome = match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => LeaderboardState::Failed("leaderboard cache closed".to_string()),
        };
        outcome
    }
}
