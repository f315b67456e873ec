//! Which directories to enter and which files to list.
//!
//! [`FilterPolicy`] is the whole customization surface of a scan: one
//! predicate for directories, one for files. Both work on basenames only and
//! never touch the filesystem, so the walker can be tested against arbitrary
//! policies and the policy against arbitrary names.

use crate::config::ManifestConfig;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Lower-cased, without the leading dot.
    extension: String,
    ignore_dirs: BTreeSet<String>,
    ignore_files: BTreeSet<String>,
}

impl FilterPolicy {
    /// Build a policy from an extension (`"html"` or `".html"`, any case) and
    /// the two ignore sets.
    pub fn new<D, F>(extension: &str, ignore_dirs: D, ignore_files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            extension: normalize_extension(extension),
            ignore_dirs: ignore_dirs.into_iter().map(Into::into).collect(),
            ignore_files: ignore_files.into_iter().map(Into::into).collect(),
        }
    }

    /// Policy for a resolved config.
    ///
    /// The output basenames are always ignored on top of `ignore_files`, so a
    /// manifest written inside the scan root never lists itself.
    pub fn from_config(config: &ManifestConfig) -> Self {
        let mut policy = Self::new(
            &config.extension,
            config.ignore_dirs.iter().cloned(),
            config.ignore_files.iter().cloned(),
        );
        policy.ignore_files.insert(config.output.text.clone());
        policy.ignore_files.insert(config.output.json.clone());
        policy
    }

    /// `false` iff the directory basename is in the directory ignore set.
    pub fn should_descend(&self, dir_name: &str) -> bool {
        !self.ignore_dirs.contains(dir_name)
    }

    /// `true` iff the extension matches (case-insensitively) and the basename
    /// is not in the file ignore set.
    pub fn should_include(&self, file_name: &str) -> bool {
        let ext_matches = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase() == self.extension)
            .unwrap_or(false);

        ext_matches && !self.ignore_files.contains(file_name)
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> FilterPolicy {
        FilterPolicy::from_config(&ManifestConfig::default())
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let p = policy();
        assert!(p.should_include("soup.html"));
        assert!(p.should_include("soup.HTML"));
        assert!(p.should_include("soup.Html"));
    }

    #[test]
    fn other_extensions_rejected() {
        let p = policy();
        assert!(!p.should_include("soup.htm"));
        assert!(!p.should_include("soup.html.bak"));
        assert!(!p.should_include("HEAD"));
        assert!(!p.should_include("notes.md"));
    }

    #[test]
    fn dotfile_without_extension_rejected() {
        assert!(!policy().should_include(".html"));
    }

    #[test]
    fn ignored_basenames_rejected() {
        let p = policy();
        assert!(!p.should_include("index.html"));
        assert!(!p.should_include("index-static.html"));
        assert!(!p.should_include("manifest.html"));
    }

    #[test]
    fn ignored_basename_is_exact_match() {
        let p = policy();
        assert!(p.should_include("INDEX.html"));
        assert!(p.should_include("my-index.html"));
    }

    #[test]
    fn ignored_dirs_not_descended() {
        let p = policy();
        for dir in [".git", ".github", "img", "images", "assets", "css", "js"] {
            assert!(!p.should_descend(dir), "{dir} should be pruned");
        }
        assert!(p.should_descend("salads"));
        assert!(p.should_descend("Images"));
    }

    #[test]
    fn extension_given_with_dot_and_caps() {
        let p = FilterPolicy::new(".MD", Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(p.extension(), "md");
        assert!(p.should_include("readme.md"));
    }

    #[test]
    fn output_names_always_ignored() {
        let mut config = ManifestConfig::default();
        config.extension = "json".into();
        config.ignore_files.clear();
        let p = FilterPolicy::from_config(&config);
        assert!(!p.should_include("manifest.json"));
        assert!(p.should_include("recipe.json"));
    }
}
