//! Remote leaderboard models.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

use super::Difficulty;

/// A record as stored by the remote leaderboard service.
///
/// Read-only on this side; never written to the local store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Server-assigned id
    pub id: i64,
    pub player_name: String,
    pub score: u32,
    pub difficulty: Difficulty,
    /// Server-assigned creation time
    #[serde(deserialize_with = "deserialize_remote_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Parse a timestamp as a PostgREST-style backend renders it.
///
/// Accepts RFC 3339, Postgres text output with a short offset
/// (`2025-10-06 10:00:00.5+00`) and zone-less `timestamp` columns, which
/// are taken as UTC.
fn parse_remote_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_remote_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_remote_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {raw}")))
}

impl LeaderboardEntry {
    /// Leaderboard order: score descending, then most recent first.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score).then_with(|| other.created_at.cmp(&self.created_at))
    }
}

/// Cached view of the remote top-N.
///
/// `Empty -> Loading -> {Ready | Failed} -> Loading -> ...`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LeaderboardState {
    /// Never refreshed
    #[default]
    Empty,
    /// A fetch is in flight
    Loading,
    /// Last fetch succeeded, entries in rank order
    Ready(Vec<LeaderboardEntry>),
    /// Last fetch failed
    Failed(String),
}

impl LeaderboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Entries of a `Ready` state, empty otherwise.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        match self {
            Self::Ready(entries) => entries,
            Self::Empty | Self::Loading | Self::Failed(_) => &[],
        }
    }
}
