//! Launcher paths and the optional settings file.
//!
//! Every value follows the same priority chain:
//!
//! 1. CLI flag
//! 2. `~/.config/lutris-bulk-adder/settings.toml`
//! 3. Lutris' standard location

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;

/// Contents of `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub paths: PathSettings,
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathSettings {
    pub database: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub games_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSettings {
    pub file_types: Option<Vec<String>>,
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("lutris-bulk-adder").join("settings.toml")
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn lutris_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lutris")
}

/// `~/.local/share/lutris/pga.db` on Linux.
pub fn default_database_path() -> PathBuf {
    lutris_data_dir().join("pga.db")
}

/// `~/.local/share/lutris/games` on Linux.
pub fn default_config_dir() -> PathBuf {
    lutris_data_dir().join("games")
}

/// `~/Games`.
pub fn default_games_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Games")
}

/// Paths given on the command line, if any.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub database: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub games_dir: Option<PathBuf>,
}

/// Fully resolved Lutris locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LutrisPaths {
    pub database: PathBuf,
    pub config_dir: PathBuf,
    pub games_dir: PathBuf,
}

impl LutrisPaths {
    pub fn resolve(overrides: PathOverrides, settings: &Settings) -> Self {
        let paths = &settings.paths;
        Self {
            database: overrides
                .database
                .or_else(|| paths.database.clone())
                .unwrap_or_else(default_database_path),
            config_dir: overrides
                .config_dir
                .or_else(|| paths.config_dir.clone())
                .unwrap_or_else(default_config_dir),
            games_dir: overrides
                .games_dir
                .or_else(|| paths.games_dir.clone())
                .unwrap_or_else(default_games_dir),
        }
    }
}

/// Pick the scan extensions: CLI list, then settings, then the built-in
/// defaults.
pub fn resolve_file_types(cli: Option<Vec<String>>, settings: &Settings) -> Vec<String> {
    cli.filter(|types| !types.is_empty())
        .or_else(|| settings.scan.file_types.clone())
        .unwrap_or_else(|| {
            lutris_bulk_core::DEFAULT_ROM_FILE_EXTS
                .iter()
                .map(|e| e.to_string())
                .collect()
        })
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
