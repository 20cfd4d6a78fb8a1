use async_trait::async_trait;
use scoresync_types::{LeaderboardEntry, SubmitScore};

use crate::ClientError;

/// Remote leaderboard operations.
///
/// One network round trip per call, no retries.
#[async_trait]
pub trait LeaderboardApi: Send + Sync {
    /// Create a record remotely.
    ///
    /// `Ok` means the server accepted the record. The stored representation
    /// is `None` when the server acknowledged without a readable body.
    async fn submit(&self, score: &SubmitScore)
        -> Result<Option<LeaderboardEntry>, ClientError>;

    /// Top `limit` entries, score descending then most recent first.
    async fn fetch_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ClientError>;
}
