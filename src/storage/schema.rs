//! Schema management for the memo database.
//!
//! The schema is a single table. It is created when absent and never
//! altered afterwards.

use rusqlite::{Connection, OptionalExtension};

use crate::error::MemoError;

/// Name of the memo table.
pub const TABLE: &str = "memos";

/// Check whether the memo table already exists.
pub fn table_exists(conn: &Connection) -> Result<bool, MemoError> {
    conn.query_row(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [TABLE],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .map(|name| name.is_some())
    .map_err(|e| MemoError::Storage(format!("Failed to inspect schema: {e}")))
}

/// Create the memo table if it does not exist yet.
///
/// Returns `true` when the table was created by this call.
pub fn ensure(conn: &Connection) -> Result<bool, MemoError> {
    if table_exists(conn)? {
        return Ok(false);
    }

    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS memos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| MemoError::Storage(format!("Failed to create memo table: {e}")))?;

    Ok(true)
}
