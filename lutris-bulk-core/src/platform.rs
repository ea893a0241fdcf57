//! Validated runner/core configuration for a single platform.
//!
//! Runner and core identifiers are stored exactly as given. They must already
//! match the launcher's own conventions (lowercase runner script names, core
//! names taken from `<core>_libretro.so`), since they end up verbatim in the
//! database and in per-game config files.

use crate::error::{ListKind, MissingField, PlatformConfigError};

/// The multi-system runner that is the only one allowed to carry cores.
pub const LIBRETRO: &str = "libretro";

/// Runners and libretro cores available for one platform, with defaults.
///
/// Construction goes through [`PlatformConfig::new`], which enforces:
/// - `runners` is non-empty and contains `default_runner`
/// - `cores`, when present, requires `libretro` among the runners
/// - `default_core`, when present, is one of `cores` and requires
///   `libretro` as the default runner
/// - no identifier is blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    runners: Vec<String>,
    default_runner: String,
    cores: Option<Vec<String>>,
    default_core: Option<String>,
}

impl PlatformConfig {
    /// Validate and build a configuration.
    ///
    /// Rules are checked in a fixed order and the first failure is returned.
    /// The final basic-shape pass is the exception: it reports every
    /// violation it finds as a single [`PlatformConfigError::InvalidData`].
    pub fn new(
        runners: Vec<String>,
        default_runner: Option<String>,
        cores: Option<Vec<String>>,
        default_core: Option<String>,
    ) -> Result<Self, PlatformConfigError> {
        let default_runner = match (runners.is_empty(), default_runner) {
            (false, Some(runner)) => runner,
            (true, None) => {
                return Err(PlatformConfigError::MissingRequired(
                    MissingField::RunnersAndDefaultRunner,
                ));
            }
            (true, Some(_)) => {
                return Err(PlatformConfigError::MissingRequired(MissingField::Runners));
            }
            (false, None) => {
                return Err(PlatformConfigError::MissingRequired(
                    MissingField::DefaultRunner,
                ));
            }
        };

        if !runners.contains(&default_runner) {
            return Err(PlatformConfigError::default_not_in_list(
                ListKind::Runner,
                default_runner,
            ));
        }

        if is_given(&default_core) && cores.is_none() {
            return Err(PlatformConfigError::MissingRequired(MissingField::Cores));
        }

        if cores.as_ref().is_some_and(|c| !c.is_empty()) && !runners.iter().any(|r| r == LIBRETRO)
        {
            return Err(PlatformConfigError::ExpectedValueMissing { expected: LIBRETRO });
        }

        if let (Some(cores), Some(core)) = (&cores, &default_core) {
            if !cores.contains(core) {
                return Err(PlatformConfigError::default_not_in_list(
                    ListKind::Core,
                    core.clone(),
                ));
            }
        }

        if let Some(core) = default_core.as_deref().filter(|c| !c.is_empty()) {
            if default_runner != LIBRETRO {
                return Err(PlatformConfigError::MisconfiguredDefaults {
                    default_runner,
                    default_core: core.to_string(),
                });
            }
        }

        let invalidations = basic_violations(&runners, &default_runner, &cores, &default_core);
        if !invalidations.is_empty() {
            return Err(PlatformConfigError::InvalidData(invalidations));
        }

        Ok(Self {
            runners,
            default_runner,
            cores,
            default_core,
        })
    }

    /// Convenience constructor for static data tables.
    pub fn from_static(
        runners: &[&str],
        default_runner: &str,
        cores: Option<&[&str]>,
        default_core: Option<&str>,
    ) -> Result<Self, PlatformConfigError> {
        Self::new(
            runners.iter().map(|r| r.to_string()).collect(),
            Some(default_runner.to_string()),
            cores.map(|c| c.iter().map(|c| c.to_string()).collect()),
            default_core.map(str::to_string),
        )
    }

    pub fn runners(&self) -> &[String] {
        &self.runners
    }

    pub fn default_runner(&self) -> &str {
        &self.default_runner
    }

    /// Libretro cores, if the platform can run under libretro.
    pub fn cores(&self) -> Option<&[String]> {
        self.cores.as_deref()
    }

    pub fn default_core(&self) -> Option<&str> {
        self.default_core.as_deref()
    }

    pub fn has_runner(&self, runner: &str) -> bool {
        self.runners.iter().any(|r| r == runner)
    }

    pub fn has_core(&self, core: &str) -> bool {
        self.cores
            .as_ref()
            .is_some_and(|cores| cores.iter().any(|c| c == core))
    }
}

/// An optional string counts as given only when it is non-empty.
fn is_given(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collect every basic shape violation: empty lists, blank list items and
/// blank defaults.
fn basic_violations(
    runners: &[String],
    default_runner: &str,
    cores: &Option<Vec<String>>,
    default_core: &Option<String>,
) -> Vec<String> {
    let mut invalidations = Vec::new();

    check_list("runners", runners, &mut invalidations);
    if let Some(cores) = cores {
        check_list("cores", cores, &mut invalidations);
    }

    if is_blank(default_runner) {
        invalidations.push("The default_runner string mustn't be empty".to_string());
    }
    if default_core.as_deref().is_some_and(is_blank) {
        invalidations.push("The default_core string mustn't be empty".to_string());
    }

    invalidations
}

fn check_list(name: &str, items: &[String], invalidations: &mut Vec<String>) {
    if items.is_empty() {
        invalidations.push(format!("The {name} list mustn't be empty"));
        return;
    }
    for (index, item) in items.iter().enumerate() {
        if is_blank(item) {
            invalidations.push(format!("Item {index} in the {name} list mustn't be empty"));
        }
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
