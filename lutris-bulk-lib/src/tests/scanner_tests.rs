use super::*;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"rom").unwrap();
}

fn file_names(files: &BTreeSet<PathBuf>) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn matches_extensions_case_insensitively() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "game1.NES");
    touch(tmp.path(), "game2.iso");
    touch(tmp.path(), "readme.txt");

    let files = scan_for_extensions(tmp.path(), &extension_set(&["nes", "iso"])).unwrap();
    assert_eq!(file_names(&files), vec!["game1.NES", "game2.iso"]);
    assert!(files.iter().all(|p| p.is_absolute()));
}

#[test]
fn files_without_extension_are_skipped() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "README");
    touch(tmp.path(), "trailing.");
    touch(tmp.path(), "ok.gb");

    let files = scan_for_extensions(tmp.path(), &extension_set(&["gb"])).unwrap();
    assert_eq!(file_names(&files), vec!["ok.gb"]);
}

#[test]
fn only_last_extension_counts() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "game.iso.bak");
    touch(tmp.path(), "game.bak.iso");

    let files = scan_for_extensions(tmp.path(), &extension_set(&["iso"])).unwrap();
    assert_eq!(file_names(&files), vec!["game.bak.iso"]);
}

#[test]
fn scan_is_not_recursive() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("nested.iso");
    fs::create_dir(&nested).unwrap();
    touch(&nested, "inner.iso");
    touch(tmp.path(), "top.iso");

    let files = scan_for_extensions(tmp.path(), &extension_set(&["iso"])).unwrap();
    assert_eq!(file_names(&files), vec!["top.iso"]);
}

#[test]
fn missing_root_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    let err = scan_for_extensions(&tmp.path().join("nope"), &extension_set(&["iso"])).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

#[test]
fn file_root_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "game.iso");
    let err =
        scan_for_extensions(&tmp.path().join("game.iso"), &extension_set(&["iso"])).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

#[test]
fn extension_set_normalizes_input() {
    let set = extension_set(&[".ISO", "Chd", "", "."]);
    assert_eq!(set.len(), 2);
    assert!(set.contains("iso"));
    assert!(set.contains("chd"));
}

#[cfg(unix)]
#[test]
fn symlinked_duplicates_are_listed_once() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "real.sfc");
    std::os::unix::fs::symlink(tmp.path().join("real.sfc"), tmp.path().join("alias.sfc"))
        .unwrap();

    let files = scan_for_extensions(tmp.path(), &extension_set(&["sfc"])).unwrap();
    assert_eq!(file_names(&files), vec!["real.sfc"]);
}
