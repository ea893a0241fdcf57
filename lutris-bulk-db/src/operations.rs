//! Reads and inserts against the Lutris `games` table.

use rusqlite::{Connection, params};

use crate::error::DbError;
use crate::types::GameRow;

/// Highest game id currently in the table, or 0 when it is empty.
pub fn max_game_id(conn: &Connection) -> Result<i64, DbError> {
    let id: i64 = conn.query_row("SELECT COALESCE(MAX(id), 0) FROM games", [], |row| {
        row.get(0)
    })?;
    Ok(id)
}

/// The id the next imported game should take.
pub fn next_game_id(conn: &Connection) -> Result<i64, DbError> {
    Ok(max_game_id(conn)? + 1)
}

/// Insert one freshly imported game.
///
/// Runs as its own statement, so on an autocommit connection the row is
/// committed immediately.
pub fn insert_game(conn: &Connection, row: &GameRow) -> Result<(), DbError> {
    conn.execute(
        "INSERT INTO games (id, name, slug, installer_slug, parent_slug, platform, runner,
                            executable, directory, updated, lastplayed, installed, installed_at,
                            year, configpath, has_custom_banner, has_custom_icon, playtime,
                            hidden, service, service_id)
         VALUES (?1, ?2, ?3, NULL, NULL, ?4, ?5,
                 NULL, ?6, NULL, 0, 1, ?7,
                 NULL, ?8, NULL, NULL, NULL,
                 0, NULL, NULL)",
        params![
            row.id,
            row.name,
            row.slug,
            row.platform,
            row.runner,
            row.directory,
            row.installed_at,
            row.configpath,
        ],
    )?;
    log::debug!("Inserted game {} ({}) into games table", row.id, row.slug);
    Ok(())
}
