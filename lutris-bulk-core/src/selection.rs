//! Runner and core resolution for one import invocation.
//!
//! Resolution starts from the platform defaults and applies optional user
//! overrides. The result is computed once and shared by every scanned file.

use crate::error::LookupError;
use crate::platform::{LIBRETRO, PlatformConfig};

/// The runner (and libretro core, if any) chosen for an import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSelection {
    pub runner: String,
    /// Only ever set when `runner` is libretro. `None` means no core is
    /// recorded in the game config.
    pub core: Option<String>,
}

impl RunnerSelection {
    /// Resolve the runner and core for `platform`.
    ///
    /// A runner override must be one of the platform's runners. A core
    /// override is only consulted when the resolved runner is libretro, and
    /// must then be one of the platform's cores.
    pub fn resolve(
        platform_name: &str,
        config: &PlatformConfig,
        runner_override: Option<&str>,
        core_override: Option<&str>,
    ) -> Result<Self, LookupError> {
        let runner = match runner_override {
            Some(runner) if config.has_runner(runner) => runner.to_string(),
            Some(runner) => {
                return Err(LookupError::UnknownRunner {
                    platform: platform_name.to_string(),
                    runner: runner.to_string(),
                    available: config.runners().to_vec(),
                });
            }
            None => config.default_runner().to_string(),
        };

        if runner != LIBRETRO {
            if let Some(core) = core_override {
                log::debug!("Ignoring core '{}' for non-libretro runner '{}'", core, runner);
            }
            return Ok(Self { runner, core: None });
        }

        let core = match core_override {
            Some(core) if config.has_core(core) => Some(core.to_string()),
            Some(core) => {
                return Err(LookupError::UnknownCore {
                    platform: platform_name.to_string(),
                    core: core.to_string(),
                    available: config.cores().map(<[String]>::to_vec).unwrap_or_default(),
                });
            }
            None => config.default_core().map(str::to_string),
        };

        Ok(Self { runner, core })
    }

    pub fn is_libretro(&self) -> bool {
        self.runner == LIBRETRO
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
