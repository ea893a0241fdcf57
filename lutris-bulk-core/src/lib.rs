//! Platform data for bulk-importing ROMs into Lutris.
//!
//! Holds the validated per-platform runner/core configuration, the built-in
//! registry of known platforms, and the logic that turns user overrides into
//! the runner and core used for an import run. Nothing here touches the
//! file system.

pub mod error;
pub mod platform;
pub mod platform_table;
pub mod registry;
pub mod selection;

pub use error::{ListKind, LookupError, MissingField, PlatformConfigError, RegistryError};
pub use platform::{LIBRETRO, PlatformConfig};
pub use platform_table::DEFAULT_ROM_FILE_EXTS;
pub use registry::{PlatformEntry, PlatformRegistry};
pub use selection::RunnerSelection;
