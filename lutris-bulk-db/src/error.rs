use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Error opening database {0}: file not found")]
    Missing(String),

    #[error("SQLite error, is {0} a valid Lutris database? (no 'games' table)")]
    NotLutrisDatabase(String),
}
