//! Per-game Lutris config files.
//!
//! Lutris keeps one YAML file per game under its `games/` directory:
//!
//! ```yaml
//! game:
//!   core: picodrive
//!   main_file: /roms/genesis/Sonic.md
//! libretro: {}
//! system: {}
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::error::ImportError;
use crate::options::GameOptions;

pub type Section = BTreeMap<String, String>;

/// The YAML payload of a per-game config file. Sections and keys are
/// emitted in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GameConfig {
    sections: BTreeMap<String, Section>,
}

impl GameConfig {
    /// Build the config for one game.
    ///
    /// The `game` section holds `main_file`, then `core` when given, then the
    /// user options on top (user keys win on conflict). The runner section
    /// and `system` are left empty.
    pub fn new(runner: &str, main_file: &str, core: Option<&str>, options: &GameOptions) -> Self {
        let mut game = Section::new();
        game.insert("main_file".to_string(), main_file.to_string());
        if let Some(core) = core {
            game.insert("core".to_string(), core.to_string());
        }
        for (key, value) in options.iter() {
            game.insert(key.to_string(), value.to_string());
        }

        let mut sections = BTreeMap::new();
        sections.insert(runner.to_string(), Section::new());
        sections.insert("game".to_string(), game);
        sections.insert("system".to_string(), Section::new());
        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn game(&self) -> Option<&Section> {
        self.section("game")
    }

    pub fn to_yaml(&self) -> Result<String, ImportError> {
        Ok(serde_yml::to_string(self)?)
    }

    /// Write the YAML to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), ImportError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "tests/game_config_tests.rs"]
mod tests;
