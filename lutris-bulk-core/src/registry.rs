//! Read-only registry mapping platform names to their configuration.
//!
//! The registry is built once at startup. A single invalid entry fails the
//! whole build, so lookups never see half-validated data.

use std::collections::BTreeMap;

use crate::error::{LookupError, RegistryError};
use crate::platform::PlatformConfig;
use crate::platform_table::PLATFORM_TABLE;

/// Raw constructor arguments for one registry entry.
#[derive(Debug, Clone, Copy)]
pub struct PlatformEntry {
    pub name: &'static str,
    pub runners: &'static [&'static str],
    pub default_runner: &'static str,
    pub cores: Option<&'static [&'static str]>,
    pub default_core: Option<&'static str>,
}

/// Platform name (case-sensitive, e.g. "Sega Genesis") to configuration.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    platforms: BTreeMap<String, PlatformConfig>,
}

impl PlatformRegistry {
    /// Build the registry from the built-in platform table.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_entries(PLATFORM_TABLE)
    }

    /// Build a registry from arbitrary entries, failing on the first
    /// invalid or duplicated one.
    pub fn from_entries(entries: &[PlatformEntry]) -> Result<Self, RegistryError> {
        let mut platforms = BTreeMap::new();
        for entry in entries {
            let config = PlatformConfig::from_static(
                entry.runners,
                entry.default_runner,
                entry.cores,
                entry.default_core,
            )
            .map_err(|source| RegistryError::InvalidEntry {
                platform: entry.name.to_string(),
                source,
            })?;

            if platforms.insert(entry.name.to_string(), config).is_some() {
                return Err(RegistryError::DuplicatePlatform(entry.name.to_string()));
            }
        }
        log::debug!("Platform registry built with {} entries", platforms.len());
        Ok(Self { platforms })
    }

    /// Look up a platform by its exact name.
    pub fn lookup(&self, name: &str) -> Result<&PlatformConfig, LookupError> {
        self.platforms
            .get(name)
            .ok_or_else(|| LookupError::UnknownPlatform(name.to_string()))
    }

    /// All platforms in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlatformConfig)> {
        self.platforms.iter().map(|(name, config)| (name.as_str(), config))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.platforms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
