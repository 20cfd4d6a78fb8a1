use rusqlite::{Connection, Error as SqliteError};

/// Create the score table and indexes if they are missing.
///
/// `AUTOINCREMENT` keeps ids monotonic across `clear_all`.
pub(super) fn init(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS high_scores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_name TEXT NOT NULL,
            score INTEGER NOT NULL,
            difficulty TEXT NOT NULL,
            created_at INTEGER NOT NULL DEFAULT 0,
            synced INTEGER NOT NULL DEFAULT 0
        )",
    )?;

    // Files written before sync tracking existed lack these columns.
    add_column_if_missing(
        conn,
        "ALTER TABLE high_scores ADD COLUMN created_at INTEGER NOT NULL DEFAULT 0",
    )?;
    add_column_if_missing(
        conn,
        "ALTER TABLE high_scores ADD COLUMN synced INTEGER NOT NULL DEFAULT 0",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_high_scores_unsynced
            ON high_scores (synced, id);
         CREATE INDEX IF NOT EXISTS idx_high_scores_score
            ON high_scores (score DESC)",
    )
}

fn add_column_if_missing(conn: &Connection, statement: &str) -> rusqlite::Result<()> {
    match conn.execute(statement, []) {
        Ok(_) => Ok(()),
        Err(SqliteError::SqliteFailure(_, Some(message)))
            if message.contains("duplicate column name") =>
        {
            Ok(())
        },
        Err(err) => Err(err),
    }
}
