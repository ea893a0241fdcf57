//! Directory scanner for ROM files.
//!
//! Only direct children of the root are considered. A file is kept when its
//! extension, lowercased, is in the allow-list.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Build the extension allow-list, lowercased and without leading dots.
pub fn extension_set<S: AsRef<str>>(extensions: &[S]) -> HashSet<String> {
    extensions
        .iter()
        .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Scan `root` (non-recursively) for files whose extension is allowed.
///
/// Returned paths are absolute and resolved, so the same file reached
/// through two names is only listed once. The set is sorted, which keeps
/// import order stable between runs.
pub fn scan_for_extensions(
    root: &Path,
    extensions: &HashSet<String>,
) -> Result<BTreeSet<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.display().to_string()));
    }

    let root = root.canonicalize().map_err(|source| ScanError::Io {
        path: root.display().to_string(),
        source,
    })?;
    let entries = std::fs::read_dir(&root).map_err(|source| ScanError::Io {
        path: root.display().to_string(),
        source,
    })?;

    let mut files = BTreeSet::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !has_matching_extension(&path, extensions) {
            log::debug!("Skipping {}", path.display());
            continue;
        }
        let resolved = path.canonicalize().unwrap_or(path);
        files.insert(resolved);
    }

    log::debug!("Found {} matching files in {}", files.len(), root.display());
    Ok(files)
}

/// Check if a path has a non-empty extension in the allowed set.
fn has_matching_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| extensions.contains(&e.to_lowercase()))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
