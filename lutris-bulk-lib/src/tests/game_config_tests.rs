use super::*;

fn rom() -> &'static str {
    "/roms/genesis/Sonic.md"
}

#[test]
fn libretro_config_records_core() {
    let config = GameConfig::new("libretro", rom(), Some("picodrive"), &GameOptions::default());
    let game = config.game().unwrap();
    assert_eq!(game.get("main_file").map(String::as_str), Some("/roms/genesis/Sonic.md"));
    assert_eq!(game.get("core").map(String::as_str), Some("picodrive"));
    assert!(config.section("libretro").unwrap().is_empty());
    assert!(config.section("system").unwrap().is_empty());
}

#[test]
fn standalone_runner_has_no_core() {
    let config = GameConfig::new("dgen", rom(), None, &GameOptions::default());
    assert!(config.game().unwrap().get("core").is_none());
    assert!(config.section("dgen").is_some());
    assert!(config.section("libretro").is_none());
}

#[test]
fn user_options_merge_and_win() {
    let options: GameOptions = "platform=0 core=blastem".parse().unwrap();
    let config = GameConfig::new("libretro", rom(), Some("picodrive"), &options);
    let game = config.game().unwrap();
    assert_eq!(game.get("platform").map(String::as_str), Some("0"));
    assert_eq!(game.get("core").map(String::as_str), Some("blastem"));
}

#[test]
fn yaml_round_trips_through_parser() {
    let options: GameOptions = "platform=0".parse().unwrap();
    let config = GameConfig::new("dolphin", rom(), None, &options);
    let yaml = config.to_yaml().unwrap();

    let parsed: BTreeMap<String, Section> = serde_yml::from_str(&yaml).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed["game"]["platform"], "0");
    assert_eq!(parsed["game"]["main_file"], "/roms/genesis/Sonic.md");
    assert!(parsed["dolphin"].is_empty());
}

#[test]
fn sections_are_sorted() {
    let config = GameConfig::new("libretro", rom(), Some("picodrive"), &GameOptions::default());
    let yaml = config.to_yaml().unwrap();
    let game = yaml.find("game:").unwrap();
    let libretro = yaml.find("libretro:").unwrap();
    let system = yaml.find("system:").unwrap();
    assert!(game < libretro && libretro < system);
}

#[test]
fn write_to_creates_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("sonic-1700000000.yml");
    let config = GameConfig::new("libretro", rom(), Some("picodrive"), &GameOptions::default());
    config.write_to(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, config.to_yaml().unwrap());
}

#[test]
fn write_to_missing_directory_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("x.yml");
    let config = GameConfig::new("libretro", rom(), None, &GameOptions::default());
    assert!(matches!(config.write_to(&path), Err(ImportError::Io { .. })));
}
