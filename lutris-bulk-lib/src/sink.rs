//! Destinations for built game records.
//!
//! [`LutrisSink`] writes the YAML file and inserts the database row.
//! [`DryRunSink`] prints both payloads instead.

use std::io::Write;
use std::path::Path;

use rusqlite::Connection;

use crate::error::ImportError;
use crate::record::GameRecord;

/// Something that persists (or reports) one game record at a time.
pub trait GameSink {
    fn write(&mut self, record: &GameRecord) -> Result<(), ImportError>;
}

/// Writes config files into the Lutris games directory and rows into
/// `pga.db`.
///
/// Each row is committed on its own. A failure part-way through a run
/// leaves earlier games in place.
pub struct LutrisSink<'c> {
    conn: &'c Connection,
}

impl<'c> LutrisSink<'c> {
    /// Fails if the config directory is missing, before anything is written.
    pub fn new(conn: &'c Connection, config_dir: &Path) -> Result<Self, ImportError> {
        if !config_dir.is_dir() {
            return Err(ImportError::MissingConfigDir(
                config_dir.display().to_string(),
            ));
        }
        Ok(Self { conn })
    }
}

impl GameSink for LutrisSink<'_> {
    fn write(&mut self, record: &GameRecord) -> Result<(), ImportError> {
        record.config.write_to(&record.config_path)?;
        lutris_bulk_db::insert_game(self.conn, &record.row)?;
        log::debug!(
            "Wrote {} and inserted game {}",
            record.config_path.display(),
            record.id()
        );
        Ok(())
    }
}

/// Prints what would be written without touching the file system or the
/// database.
pub struct DryRunSink<W: Write> {
    out: W,
}

impl<W: Write> DryRunSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameSink for DryRunSink<W> {
    fn write(&mut self, record: &GameRecord) -> Result<(), ImportError> {
        let yaml = record.config.to_yaml()?;
        write!(
            self.out,
            "file: {}\nSQLite:\n{}\nYML at {}:\n{}\n",
            record.file.display(),
            record.row,
            record.config_path.display(),
            yaml,
        )
        .map_err(|source| ImportError::Io {
            path: "<dry-run output>".to_string(),
            source,
        })
    }
}
