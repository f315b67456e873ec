//! Manifest configuration.
//!
//! Everything a scan depends on lives in [`ManifestConfig`]: the scan root,
//! the content extension, both ignore sets, and where the two artifacts are
//! written. The stock defaults describe a `recipes/` folder of HTML pages with
//! the manifest written next to them, so the tool runs with no arguments and
//! no config file.
//!
//! ## Config File
//!
//! A TOML file is only read when passed explicitly (`--config path`). It is
//! sparse: keys it omits keep their stock value.
//!
//! ```toml
//! root = "recipes"
//! extension = "html"
//! ignore_dirs = [".git", ".github", "img", "images", "assets", "css", "js"]
//! ignore_files = ["index.html", "index-static.html", "manifest.html", "manifest.txt", "manifest.json"]
//!
//! [output]
//! # dir = "recipes"       # defaults to the scan root
//! text = "manifest.txt"
//! json = "manifest.json"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Scan and output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Directory to scan. Relative paths resolve against the working directory.
    pub root: PathBuf,
    /// Content extension, with or without the leading dot. Matched case-insensitively.
    pub extension: String,
    /// Directory basenames that are never descended into, at any depth.
    pub ignore_dirs: Vec<String>,
    /// File basenames excluded even when their extension matches.
    pub ignore_files: Vec<String>,
    /// Where the manifest artifacts go.
    pub output: OutputConfig,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("recipes"),
            extension: "html".to_string(),
            ignore_dirs: [".git", ".github", "img", "images", "assets", "css", "js"]
                .map(String::from)
                .to_vec(),
            ignore_files: [
                "index.html",
                "index-static.html",
                "manifest.html",
                "manifest.txt",
                "manifest.json",
            ]
            .map(String::from)
            .to_vec(),
            output: OutputConfig::default(),
        }
    }
}

/// Output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory both files are written to. `None` means the scan root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Basename of the line-delimited text manifest.
    pub text: String,
    /// Basename of the JSON manifest.
    pub json: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            text: "manifest.txt".to_string(),
            json: "manifest.json".to_string(),
        }
    }
}

impl ManifestConfig {
    /// Validate values that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = self.extension.trim().trim_start_matches('.');
        if ext.is_empty() {
            return Err(ConfigError::Validation("extension must not be empty".into()));
        }
        if !is_plain_name(ext) {
            return Err(ConfigError::Validation(format!(
                "extension must not contain path separators: {:?}",
                self.extension
            )));
        }
        for (key, name) in [("output.text", &self.output.text), ("output.json", &self.output.json)]
        {
            if name.is_empty() || !is_plain_name(name) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain file name, got {name:?}"
                )));
            }
        }
        if self.output.text == self.output.json {
            return Err(ConfigError::Validation(
                "output.text and output.json must differ".into(),
            ));
        }
        for (key, names) in [("ignore_dirs", &self.ignore_dirs), ("ignore_files", &self.ignore_files)]
        {
            if let Some(bad) = names.iter().find(|n| n.is_empty() || !is_plain_name(n)) {
                return Err(ConfigError::Validation(format!(
                    "{key} entries must be basenames, got {bad:?}"
                )));
            }
        }
        Ok(())
    }

    /// Directory the artifacts are written to, given the resolved scan root.
    pub fn output_dir<'a>(&'a self, root: &'a Path) -> &'a Path {
        self.output.dir.as_deref().unwrap_or(root)
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.contains('/') && !name.contains('\\')
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(ManifestConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values, arrays included, replace base values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ManifestConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ManifestConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load a config file, layered over the stock defaults.
///
/// Unlike a discovered config, an explicitly named file must exist.
pub fn load_config(path: &Path) -> Result<ManifestConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value()?, Some(overlay))
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# recipe-manifest configuration
# ==============================
# All settings are optional. Values shown below are the defaults.
# Pass this file with `recipe-manifest --config <file>`.
# Unknown keys will cause an error.

# Directory to scan, relative to the working directory.
# Use "." to scan the whole repository.
root = "recipes"

# Files with this extension (case-insensitive) become manifest entries.
extension = "html"

# Directories with these names are skipped at any depth.
ignore_dirs = [".git", ".github", "img", "images", "assets", "css", "js"]

# Files with these exact names are never listed.
# The output file names below are always ignored as well.
ignore_files = ["index.html", "index-static.html", "manifest.html", "manifest.txt", "manifest.json"]

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Directory both manifests are written to. Defaults to the scan root.
# dir = "recipes"

# One relative path per line, sorted.
text = "manifest.txt"

# { "generatedAt": ..., "count": ..., "files": [...] }
json = "manifest.json"
"##
}
