//! Depth-first directory walk.
//!
//! The walker only decides *what* is collected; the [`FilterPolicy`] decides
//! which names qualify. Ignored directories are pruned before they are read,
//! so nothing below them is ever listed, however deep it sits.
//!
//! Symlinks are not followed. Entries that are neither directories nor regular
//! files are skipped. Any error listing a directory aborts the walk: a
//! manifest built from a partial listing would silently drop recipes.

use crate::filter::FilterPolicy;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::WalkDir;

#[derive(Error, Debug)]
#[error("cannot read {}: {source}", path.display())]
pub struct WalkError {
    pub path: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

/// Collect every file under `root` the policy includes.
///
/// Returned paths are `root` joined with the entry's relative path, in
/// filesystem enumeration order.
pub fn walk(root: &Path, policy: &FilterPolicy) -> Result<Vec<PathBuf>, WalkError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(false).into_iter();
    let pruned = walker.filter_entry(|entry| {
        // The root itself is never subject to the directory ignore set.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        let descend = policy.should_descend(&name);
        if !descend {
            debug!(dir = %entry.path().display(), "skipping ignored directory");
        }
        descend
    });

    for entry in pruned {
        let entry = entry.map_err(|source| WalkError {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            trace!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }

        let include = policy.should_include(&entry.file_name().to_string_lossy());
        if include {
            files.push(entry.into_path());
        } else {
            trace!(path = %entry.path().display(), "skipping file");
        }
    }

    Ok(files)
}
