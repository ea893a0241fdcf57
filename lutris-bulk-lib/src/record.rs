//! Turns scanned files into config-file and database payloads.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lutris_bulk_core::RunnerSelection;
use lutris_bulk_db::GameRow;

use crate::error::ImportError;
use crate::game_config::GameConfig;
use crate::normalize::{NormalizedName, normalize_name};
use crate::options::GameOptions;

/// Everything shared by every game of one import run.
#[derive(Debug, Clone)]
pub struct ImportSettings {
    /// Registry platform name, stored verbatim in the database.
    pub platform: String,
    pub selection: RunnerSelection,
    pub game_options: GameOptions,
    pub strip_tokens: Vec<String>,
    /// Directory receiving the per-game YAML files.
    pub config_dir: PathBuf,
    /// Lutris install directory recorded for each game.
    pub games_dir: PathBuf,
}

/// The payloads produced for one scanned file.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub file: PathBuf,
    pub name: NormalizedName,
    pub config_path: PathBuf,
    pub config: GameConfig,
    pub row: GameRow,
}

impl GameRecord {
    pub fn id(&self) -> i64 {
        self.row.id
    }
}

/// Builds [`GameRecord`]s with consecutive ids.
#[derive(Debug)]
pub struct RecordBuilder {
    settings: ImportSettings,
    next_id: i64,
    used_config_names: HashSet<String>,
}

impl RecordBuilder {
    /// `first_id` is normally the database's `max(id) + 1`.
    pub fn new(settings: ImportSettings, first_id: i64) -> Self {
        Self {
            settings,
            next_id: first_id,
            used_config_names: HashSet::new(),
        }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Build the record for `file`, installed at unix time `installed_at`.
    ///
    /// Config files are named `<slug>-<timestamp>`. Two files with the same
    /// slug in the same second would share a name, so the timestamp part
    /// is bumped until the name is unused in this run.
    ///
    /// Fails if the ROM path or the install directory is not valid UTF-8,
    /// since both are stored as text.
    pub fn build(&mut self, file: &Path, installed_at: i64) -> Result<GameRecord, ImportError> {
        let main_file = utf8(file)?;
        let directory = utf8(&self.settings.games_dir)?.to_string();

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = normalize_name(&file_name, &self.settings.strip_tokens);

        let configpath = self.unique_config_name(&name.slug, installed_at);
        let config_path = self.settings.config_dir.join(format!("{configpath}.yml"));

        let selection = &self.settings.selection;
        let config = GameConfig::new(
            &selection.runner,
            main_file,
            selection.core.as_deref(),
            &self.settings.game_options,
        );

        let row = GameRow {
            id: self.next_id,
            name: name.display_name.clone(),
            slug: name.slug.clone(),
            platform: self.settings.platform.clone(),
            runner: selection.runner.clone(),
            directory,
            installed_at,
            configpath,
        };
        self.next_id += 1;

        Ok(GameRecord {
            file: file.to_path_buf(),
            name,
            config_path,
            config,
            row,
        })
    }

    fn unique_config_name(&mut self, slug: &str, timestamp: i64) -> String {
        let mut ts = timestamp;
        loop {
            let candidate = format!("{slug}-{ts}");
            if self.used_config_names.insert(candidate.clone()) {
                return candidate;
            }
            ts += 1;
        }
    }
}

fn utf8(path: &Path) -> Result<&str, ImportError> {
    path.to_str()
        .ok_or_else(|| ImportError::NonUtf8Path(path.display().to_string()))
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
