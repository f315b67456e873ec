//! Filesystem scan: root check, walk, normalize, sort.
//!
//! [`scan`] turns a resolved [`ManifestConfig`] into the final ordered list of
//! manifest entries. Nothing is written here; the caller hands the list to
//! [`crate::manifest`] once the whole tree has been read, so a failed scan
//! leaves any previous manifest on disk untouched.

use crate::collate::{CollateError, EntryCollator};
use crate::config::ManifestConfig;
use crate::filter::FilterPolicy;
use crate::paths::to_relative_posix;
use crate::walk::{self, WalkError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Missing folder: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error(transparent)]
    Traversal(#[from] WalkError),
    #[error(transparent)]
    Collation(#[from] CollateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Absolute scan root.
    pub root: PathBuf,
    /// Root-relative entries in collation order.
    pub files: Vec<String>,
}

/// Make `root` absolute against the working directory without resolving symlinks.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    Ok(std::path::absolute(root)?)
}

/// Scan `config.root` and return the ordered manifest entries.
pub fn scan(config: &ManifestConfig) -> Result<ScanResult, ScanError> {
    let root = resolve_root(&config.root)?;
    let policy = FilterPolicy::from_config(config);
    let files = scan_root(&root, &policy)?;
    Ok(ScanResult { root, files })
}

/// Scan an absolute root with an explicit policy.
pub fn scan_root(root: &Path, policy: &FilterPolicy) -> Result<Vec<String>, ScanError> {
    if !root.exists() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    info!(root = %root.display(), extension = policy.extension(), "scanning");

    let found = walk::walk(root, policy)?;
    let mut files: Vec<String> = found
        .iter()
        .filter_map(|path| {
            let rel = to_relative_posix(root, path);
            if rel.is_none() {
                warn!(path = %path.display(), "dropping path with no root-relative form");
            }
            rel
        })
        .collect();

    EntryCollator::english()?.sort(&mut files);

    // Distinct names can normalize to one entry (`a\b.html` next to `a/b.html`).
    let before = files.len();
    files.dedup();
    if files.len() != before {
        warn!(dropped = before - files.len(), "dropping entries that normalize to the same path");
    }

    info!(count = files.len(), "scan complete");
    Ok(files)
}
