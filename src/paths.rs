//! Root-relative, forward-slash path strings.
//!
//! Every manifest entry goes through [`to_relative_posix`] before it is sorted
//! or written, so the manifest reads the same whether it was generated on
//! Linux, macOS, or Windows.

use std::path::{Component, Path};

/// Express `path` relative to `root` using `/` as the only separator.
///
/// Returns `None` when `path` is not under `root` or when it *is* `root`
/// (a file root would otherwise produce an empty entry).
///
/// ```
/// use recipe_manifest::paths::to_relative_posix;
/// use std::path::Path;
///
/// let rel = to_relative_posix(Path::new("/site/recipes"), Path::new("/site/recipes/salads/greek.html"));
/// assert_eq!(rel.as_deref(), Some("salads/greek.html"));
/// ```
pub fn to_relative_posix(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;

    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().replace('\\', "/")),
            _ => None,
        })
        .collect();

    let joined = parts.join("/");
    let trimmed = joined.trim_start_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_at_root() {
        let rel = to_relative_posix(Path::new("/r"), Path::new("/r/soup.html"));
        assert_eq!(rel.as_deref(), Some("soup.html"));
    }

    #[test]
    fn nested_file_uses_forward_slashes() {
        let path: PathBuf = ["/r", "mains", "pasta", "carbonara.html"].iter().collect();
        let rel = to_relative_posix(Path::new("/r"), &path).unwrap();
        assert_eq!(rel, "mains/pasta/carbonara.html");
        assert!(!rel.starts_with('/'));
    }

    #[test]
    fn backslashes_never_survive() {
        let rel = to_relative_posix(Path::new("/r"), Path::new("/r/odd\\name.html")).unwrap();
        assert_eq!(rel, "odd/name.html");
        assert!(!rel.contains('\\'));
    }

    // On Unix a backslash is a legal name byte, so this collides with a real
    // `odd/name.html`; the scan keeps one of the two.
    #[cfg(unix)]
    #[test]
    fn backslash_name_collides_with_nested_path() {
        let flat = to_relative_posix(Path::new("/r"), Path::new("/r/odd\\name.html"));
        let nested = to_relative_posix(Path::new("/r"), Path::new("/r/odd/name.html"));
        assert_eq!(flat, nested);
    }

    #[test]
    fn root_itself_is_dropped() {
        assert_eq!(to_relative_posix(Path::new("/r/a.html"), Path::new("/r/a.html")), None);
    }

    #[test]
    fn path_outside_root_is_dropped() {
        assert_eq!(to_relative_posix(Path::new("/r"), Path::new("/other/a.html")), None);
    }

    #[test]
    fn relative_root_works() {
        let rel = to_relative_posix(Path::new("recipes"), Path::new("recipes/soup.html"));
        assert_eq!(rel.as_deref(), Some("soup.html"));
    }
}
