//! The two manifest artifacts and how they are written.
//!
//! A run produces one ordered list of entries and renders it twice:
//!
//! ```text
//! manifest.txt                 manifest.json
//! salads/greek.html            {
//! soup.html                      "generatedAt": "2026-10-16T09:30:00.123Z",
//!                                "count": 2,
//!                                "files": [
//!                                  "salads/greek.html",
//!                                  "soup.html"
//!                                ]
//!                              }
//! ```
//!
//! Both renderings come from the same [`Manifest`] value, so within a run the
//! text file and the JSON `files` array can never disagree.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("cannot serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered manifest entries plus the metadata written alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// ISO-8601 UTC, millisecond precision, `Z` suffix.
    pub generated_at: String,
    /// Always `files.len()`.
    pub count: usize,
    pub files: Vec<String>,
}

impl Manifest {
    /// Wrap already-ordered entries, stamping them with `generated_at`.
    pub fn new(files: Vec<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            count: files.len(),
            files,
        }
    }

    /// Wrap already-ordered entries, stamped with the current time.
    pub fn now(files: Vec<String>) -> Self {
        Self::new(files, Utc::now())
    }
}

/// Line-delimited form: one entry per line, trailing newline unless empty.
pub fn render_text(files: &[String]) -> String {
    if files.is_empty() {
        return String::new();
    }
    let mut text = files.join("\n");
    text.push('\n');
    text
}

/// JSON form: 2-space indented, single trailing newline.
pub fn render_json(manifest: &Manifest) -> Result<String, ManifestError> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Where the two artifacts land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub text: PathBuf,
    pub json: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, text_name: &str, json_name: &str) -> Self {
        Self {
            text: dir.join(text_name),
            json: dir.join(json_name),
        }
    }
}

/// Write both artifacts, text first, each as a full overwrite.
///
/// Both renderings are produced before anything touches the disk. A failed
/// JSON write after a successful text write is still an error; the pair stays
/// out of step until the next successful run.
pub fn write_manifest(manifest: &Manifest, outputs: &OutputPaths) -> Result<(), ManifestError> {
    let text = render_text(&manifest.files);
    let json = render_json(manifest)?;

    for path in [&outputs.text, &outputs.json] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ManifestError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    write_file(&outputs.text, &text)?;
    write_file(&outputs.json, &json)?;
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), ManifestError> {
    fs::write(path, contents).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote manifest file");
    Ok(())
}
