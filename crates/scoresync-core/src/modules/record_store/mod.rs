//! SQLite-backed store for locally produced score records.
//!
//! One connection per store, guarded by a mutex so every write (insert,
//! mark-synced, clear) is serialized. Reads take the same lock and therefore
//! observe a state between two completed writes.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::as_conversions,
    reason = "row counts and LIMIT values are bounded by SQLite"
)]

mod async_ops;
mod schema;
#[cfg(test)]
mod tests;

use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use scoresync_types::{Difficulty, NewScoreRecord, ScoreRecord};
use std::path::Path;
use std::sync::Arc;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Storage task failed: {0}")]
    TaskJoin(String),
}

const RECORD_COLUMNS: &str = "id, player_name, score, difficulty, created_at, synced";

/// Handle to the local score table. Cloning shares the connection.
#[derive(Clone)]
pub struct RecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore").finish_non_exhaustive()
    }
}

impl RecordStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let _mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "FULL")?;
        tracing::debug!(path = %path.display(), "Opened record store");
        Self::from_connection(conn)
    }

    /// Store that lives only as long as the process. Used by tests and
    /// ephemeral sessions.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        schema::init(&conn)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Persist a new record and return its id. New records are unsynced.
    pub fn insert(&self, record: &NewScoreRecord) -> StoreResult<i64> {
        let conn = self.conn.lock();
        let _rows_affected: usize = conn.execute(
            "INSERT INTO high_scores (player_name, score, difficulty, created_at, synced)
             VALUES (?1, ?2, ?3, ?4, 0)",
            params![
                record.player_name,
                record.score,
                record.difficulty.as_wire(),
                record.created_at
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Flag a record as acknowledged by the remote leaderboard.
    ///
    /// Returns `true` only when the flag actually flipped. Already-synced
    /// and missing ids (e.g. deleted by a reset mid-sweep) return `false`.
    pub fn mark_synced(&self, id: i64) -> StoreResult<bool> {
        let conn = self.conn.lock();
        let changed: usize = conn
            .execute("UPDATE high_scores SET synced = 1 WHERE id = ?1 AND synced = 0", [id])?;
        Ok(changed == 1)
    }

    /// Snapshot of every unsynced record in insertion order.
    ///
    /// Ordered by id, not `created_at`: the device clock may move backwards
    /// between two games.
    pub fn unsynced_records(&self) -> StoreResult<Vec<ScoreRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM high_scores
             WHERE synced = 0
             ORDER BY id ASC"
        ))?;
        let records = stmt.query_map([], map_record)?.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn unsynced_count(&self) -> StoreResult<usize> {
        let conn = self.conn.lock();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM high_scores WHERE synced = 0", [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }

    /// Highest score ever stored, `None` if the table is empty.
    pub fn max_score(&self) -> StoreResult<Option<u32>> {
        let conn = self.conn.lock();
        let max: Option<u32> =
            conn.query_row("SELECT MAX(score) FROM high_scores", [], |row| row.get(0))?;
        Ok(max)
    }

    /// Best local records, score descending then most recent first.
    pub fn top_local(&self, limit: usize) -> StoreResult<Vec<ScoreRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM high_scores
             ORDER BY score DESC, created_at DESC, id DESC
             LIMIT ?1"
        ))?;
        let records =
            stmt.query_map([limit as i64], map_record)?.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn get(&self, id: i64) -> StoreResult<Option<ScoreRecord>> {
        let conn = self.conn.lock();
        let record = conn
            .query_row(
                &format!("SELECT {RECORD_COLUMNS} FROM high_scores WHERE id = ?1"),
                [id],
                map_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Delete every record. Ids are not reused afterwards.
    pub fn clear_all(&self) -> StoreResult<usize> {
        let conn = self.conn.lock();
        let deleted: usize = conn.execute("DELETE FROM high_scores", [])?;
        Ok(deleted)
    }

    #[cfg(test)]
    pub(crate) fn execute_raw(&self, sql: &str) -> StoreResult<()> {
        self.conn.lock().execute_batch(sql)?;
        Ok(())
    }
}

fn map_record(row: &Row<'_>) -> rusqlite::Result<ScoreRecord> {
    let difficulty: String = row.get(3)?;
    let difficulty = difficulty
        .parse::<Difficulty>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    Ok(ScoreRecord {
        id: row.get(0)?,
        player_name: row.get(1)?,
        score: row.get(2)?,
        difficulty,
        created_at: row.get(4)?,
        synced: row.get(5)?,
    })
}
