//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! ## Generate
//!
//! ```text
//! Wrote 2 entries to:
//! - recipes/manifest.txt
//! - recipes/manifest.json
//! ```
//!
//! ## Check
//!
//! ```text
//! salads/greek.html
//! soup.html
//!
//! 2 entries in recipes
//! ```

use crate::manifest::OutputPaths;
use std::path::Path;

/// Show `path` relative to `base` when it lives under it, as given otherwise.
fn display_relative(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        Ok(_) => ".".to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Summary printed after both manifest files were written.
pub fn format_generate_output(count: usize, outputs: &OutputPaths, cwd: &Path) -> Vec<String> {
    vec![
        format!("Wrote {count} entries to:"),
        format!("- {}", display_relative(&outputs.text, cwd)),
        format!("- {}", display_relative(&outputs.json, cwd)),
    ]
}

pub fn print_generate_output(count: usize, outputs: &OutputPaths, cwd: &Path) {
    for line in format_generate_output(count, outputs, cwd) {
        println!("{}", line);
    }
}

/// Dry-run listing: the entries a manifest would hold, then a count.
pub fn format_check_output(files: &[String], root: &Path, cwd: &Path) -> Vec<String> {
    let mut lines: Vec<String> = files.to_vec();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    let noun = if files.len() == 1 { "entry" } else { "entries" };
    lines.push(format!(
        "{} {} in {}",
        files.len(),
        noun,
        display_relative(root, cwd)
    ));
    lines
}

pub fn print_check_output(files: &[String], root: &Path, cwd: &Path) {
    for line in format_check_output(files, root, cwd) {
        println!("{}", line);
    }
}
