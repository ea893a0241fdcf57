//! Opening an existing Lutris database.
//!
//! The database belongs to Lutris. It is never created or migrated here;
//! a missing file or a file without a `games` table is an error.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::DbError;

/// How to open the Lutris database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    ReadWrite,
    /// Used by dry runs, which only read the current maximum game id.
    ReadOnly,
}

/// Open an existing Lutris database and check that it has a `games` table.
pub fn open_database(path: &Path, mode: OpenMode) -> Result<Connection, DbError> {
    if !path.is_file() {
        return Err(DbError::Missing(path.display().to_string()));
    }

    let flags = match mode {
        OpenMode::ReadWrite => OpenFlags::SQLITE_OPEN_READ_WRITE,
        OpenMode::ReadOnly => OpenFlags::SQLITE_OPEN_READ_ONLY,
    } | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    let conn = Connection::open_with_flags(path, flags)?;
    if !has_games_table(&conn)? {
        return Err(DbError::NotLutrisDatabase(path.display().to_string()));
    }

    log::debug!("Opened Lutris database at {}", path.display());
    Ok(conn)
}

/// Whether the connection has a `games` table.
pub fn has_games_table(conn: &Connection) -> Result<bool, DbError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='games')",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Create a `games` table shaped like the one Lutris ships.
///
/// Only meant for setting up scratch databases; real databases are never
/// altered.
pub fn create_games_table(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(GAMES_TABLE_SQL)?;
    Ok(())
}

const GAMES_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    sortname TEXT,
    slug TEXT,
    installer_slug TEXT,
    parent_slug TEXT,
    platform TEXT,
    runner TEXT,
    executable TEXT,
    directory TEXT,
    updated DATETIME,
    lastplayed INTEGER,
    installed INTEGER,
    installed_at INTEGER,
    year INTEGER,
    configpath TEXT,
    has_custom_banner INTEGER,
    has_custom_icon INTEGER,
    has_custom_coverart_big INTEGER,
    playtime REAL,
    hidden INTEGER DEFAULT 0,
    service TEXT,
    service_id TEXT,
    discord_id TEXT
);
"#;
