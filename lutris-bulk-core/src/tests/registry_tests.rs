use super::*;
use crate::error::{ListKind, PlatformConfigError};

#[test]
fn builtin_registry_builds() {
    let registry = PlatformRegistry::builtin().unwrap();
    assert_eq!(registry.len(), 124);
}

#[test]
fn sega_genesis_defaults() {
    let registry = PlatformRegistry::builtin().unwrap();
    let genesis = registry.lookup("Sega Genesis").unwrap();
    assert_eq!(genesis.default_runner(), "libretro");
    assert_eq!(genesis.default_core(), Some("picodrive"));
    assert!(genesis.has_runner("dgen"));
}

#[test]
fn lookup_is_case_sensitive() {
    let registry = PlatformRegistry::builtin().unwrap();
    let err = registry.lookup("sega genesis").unwrap_err();
    assert_eq!(err, LookupError::UnknownPlatform("sega genesis".to_string()));
    assert!(err.to_string().contains("case-sensitive"));
}

#[test]
fn atari_5200_default_core_is_in_core_list() {
    let registry = PlatformRegistry::builtin().unwrap();
    let atari = registry.lookup("Atari 5200").unwrap();
    let core = atari.default_core().unwrap();
    assert!(atari.has_core(core));
}

#[test]
fn names_are_sorted() {
    let registry = PlatformRegistry::builtin().unwrap();
    let names: Vec<&str> = registry.names().collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(names.first(), Some(&"3DO"));
}

#[test]
fn invalid_entry_fails_whole_registry() {
    let entries = [
        PlatformEntry {
            name: "3DO",
            runners: &["libretro"],
            default_runner: "libretro",
            cores: Some(&["opera"]),
            default_core: Some("opera"),
        },
        PlatformEntry {
            name: "Atari 5200",
            runners: &["libretro", "a5200"],
            default_runner: "libretro",
            cores: Some(&["atari800", "a5200"]),
            default_core: Some("atar800"),
        },
    ];
    let err = PlatformRegistry::from_entries(&entries).unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidEntry {
            platform: "Atari 5200".to_string(),
            source: PlatformConfigError::DefaultNotInList {
                kind: ListKind::Core,
                value: "atar800".to_string(),
            },
        }
    );
}

#[test]
fn duplicate_entry_fails() {
    let entry = PlatformEntry {
        name: "Microsoft XBOX",
        runners: &["xemu"],
        default_runner: "xemu",
        cores: None,
        default_core: None,
    };
    let err = PlatformRegistry::from_entries(&[entry, entry]).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicatePlatform("Microsoft XBOX".to_string())
    );
}

#[test]
fn empty_registry() {
    let registry = PlatformRegistry::from_entries(&[]).unwrap();
    assert!(registry.is_empty());
    assert!(registry.lookup("3DO").is_err());
}
