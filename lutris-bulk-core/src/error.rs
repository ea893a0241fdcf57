use std::fmt;

use thiserror::Error;

/// Which required field was absent when building a [`PlatformConfig`](crate::PlatformConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Runners,
    DefaultRunner,
    RunnersAndDefaultRunner,
    /// A default core was given without a cores list to pick it from.
    Cores,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runners => f.write_str("'runners' is required"),
            Self::DefaultRunner => f.write_str("'default_runner' is required"),
            Self::RunnersAndDefaultRunner => {
                f.write_str("'runners' and 'default_runner' are required")
            }
            Self::Cores => {
                f.write_str("'cores' is required when a 'default_core' is specified")
            }
        }
    }
}

/// The list a default value failed to appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Runner,
    Core,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runner => f.write_str("runner"),
            Self::Core => f.write_str("core"),
        }
    }
}

/// Errors raised while constructing a platform configuration.
///
/// Only the first failing rule is reported, except for [`InvalidData`],
/// which collects every basic shape violation found in one pass.
///
/// [`InvalidData`]: PlatformConfigError::InvalidData
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformConfigError {
    #[error("Missing required data: {0}")]
    MissingRequired(MissingField),

    #[error("Default {kind} '{value}' is not in the list of {kind}s")]
    DefaultNotInList { kind: ListKind, value: String },

    #[error("A cores list requires '{expected}' in the runners list")]
    ExpectedValueMissing { expected: &'static str },

    #[error(
        "Default core '{default_core}' requires 'libretro' as the default runner, found '{default_runner}'"
    )]
    MisconfiguredDefaults {
        default_runner: String,
        default_core: String,
    },

    #[error("Invalid platform data:\n  {}", .0.join("\n  "))]
    InvalidData(Vec<String>),
}

impl PlatformConfigError {
    pub fn default_not_in_list(kind: ListKind, value: impl Into<String>) -> Self {
        Self::DefaultNotInList {
            kind,
            value: value.into(),
        }
    }
}

/// Errors raised while building the platform registry. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid registry entry '{platform}': {source}")]
    InvalidEntry {
        platform: String,
        source: PlatformConfigError,
    },

    #[error("Duplicate registry entry '{0}'")]
    DuplicatePlatform(String),
}

/// Recoverable lookup failures: unknown platform, runner or core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error(
        "Unknown platform '{0}'; did you make a typo perhaps?\n\
         Platform names are case-sensitive: instead of 'sega genesis' try 'Sega Genesis'."
    )]
    UnknownPlatform(String),

    #[error("Unknown runner '{runner}' for {platform}; available runners: {}", .available.join(", "))]
    UnknownRunner {
        platform: String,
        runner: String,
        available: Vec<String>,
    },

    #[error("Unknown core '{core}' for {platform}; available cores: {}", display_cores(.available))]
    UnknownCore {
        platform: String,
        core: String,
        available: Vec<String>,
    },
}

fn display_cores(cores: &[String]) -> String {
    if cores.is_empty() {
        "(none)".to_string()
    } else {
        cores.join(", ")
    }
}
