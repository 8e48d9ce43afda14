use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it does not exist yet. The database is a small
/// key-value store holding the editable board payloads.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS boards (
            name       TEXT PRIMARY KEY,
            payload    TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}
