//! Bulk import of ROM directories into the Lutris game library.
//!
//! Scans a directory for ROM files, derives a name and slug per file, and
//! writes a per-game YAML config plus a `games` row for each one. Platform
//! data and runner/core resolution live in `lutris-bulk-core`; database
//! access lives in `lutris-bulk-db`.

pub mod error;
pub mod game_config;
pub mod import;
pub mod normalize;
pub mod options;
pub mod record;
pub mod scanner;
pub mod settings;
pub mod sink;

pub use error::{ImportError, OptionError, ScanError, SettingsError};
pub use game_config::GameConfig;
pub use import::{ImportSummary, run_import, run_import_with_clock};
pub use normalize::{NormalizedName, normalize_name, slugify};
pub use options::GameOptions;
pub use record::{GameRecord, ImportSettings, RecordBuilder};
pub use scanner::{extension_set, scan_for_extensions};
pub use settings::{LutrisPaths, PathOverrides, Settings};
pub use sink::{DryRunSink, GameSink, LutrisSink};

// Re-export the platform layer so frontends only need this crate.
pub use lutris_bulk_core::{
    DEFAULT_ROM_FILE_EXTS, LIBRETRO, LookupError, PlatformConfig, PlatformRegistry,
    RegistryError, RunnerSelection,
};
