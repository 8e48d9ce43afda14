//! Persistence for the editable staffing board. The whole board is one
//! JSON payload keyed by name, so saving and resetting stay atomic.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

pub const STAFF_BOARD: &str = "staff_summary";

/// Editable columns, in display order after the store name.
pub const BOARD_COLUMNS: &[&str] = &["Actual Riders", "Idle Riders", "BF"];

/// Board rows: store name followed by one value per editable column.
pub type BoardRows = Vec<Vec<String>>;

pub fn load_board(conn: &Connection, name: &str) -> AppResult<Option<BoardRows>> {
    let payload: Option<String> = conn
        .query_row(
            "SELECT payload FROM boards WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;

    match payload {
        Some(json) => {
            let rows: BoardRows = serde_json::from_str(&json)
                .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
            Ok(Some(rows))
        }
        None => Ok(None),
    }
}

pub fn save_board(conn: &Connection, name: &str, rows: &BoardRows) -> AppResult<()> {
    let payload = serde_json::to_string(rows)
        .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
    conn.execute(
        "INSERT INTO boards (name, payload, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(name) DO UPDATE SET payload = ?2, updated_at = ?3",
        rusqlite::params![name, payload, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn reset_board(conn: &Connection, name: &str) -> AppResult<()> {
    conn.execute("DELETE FROM boards WHERE name = ?1", [name])?;
    Ok(())
}

/// Fresh board: one row per store, editable cells blank.
pub fn blank_board(stores: &[String]) -> BoardRows {
    stores
        .iter()
        .map(|store| {
            let mut row = vec![store.clone()];
            row.extend(BOARD_COLUMNS.iter().map(|_| String::new()));
            row
        })
        .collect()
}

/// Column-wise sums of the editable cells, treating blanks and
/// non-numeric text as zero.
pub fn column_totals(rows: &BoardRows) -> Vec<i64> {
    let mut totals = vec![0i64; BOARD_COLUMNS.len()];
    for row in rows {
        for (i, total) in totals.iter_mut().enumerate() {
            if let Some(cell) = row.get(i + 1) {
                *total += cell.trim().parse::<i64>().unwrap_or(0);
            }
        }
    }
    totals
}
