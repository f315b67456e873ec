//! Shared test utilities: throwaway content trees and path helpers.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = content_tree(&["soup.html", "salads/greek.html", "empty/"]);
//! let result = scan(&config_for(tmp.path())).unwrap();
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::ManifestConfig;
use crate::paths::to_relative_posix;

// =========================================================================
// Fixture setup
// =========================================================================

/// Build a temp directory holding the given relative paths.
///
/// Entries ending in `/` become empty directories; everything else becomes a
/// small file, with parent directories created as needed.
pub fn content_tree(entries: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for entry in entries {
        let path = tmp.path().join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            std::fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, "<html></html>\n").unwrap();
        }
    }
    tmp
}

/// Stock config pointed at `root`.
pub fn config_for(root: &Path) -> ManifestConfig {
    ManifestConfig {
        root: root.to_path_buf(),
        ..ManifestConfig::default()
    }
}

// =========================================================================
// Extractors
// =========================================================================

/// Root-relative names of `paths`, byte-sorted so assertions do not depend on
/// enumeration order.
pub fn relative_names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = paths
        .iter()
        .map(|p| {
            to_relative_posix(root, p)
                .unwrap_or_else(|| panic!("{} is not under {}", p.display(), root.display()))
        })
        .collect();
    names.sort();
    names
}
