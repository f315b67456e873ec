//! # Recipe Manifest
//!
//! Scans a directory of recipe pages and writes two synchronized manifests
//! for anything that needs the list without crawling the tree itself: a plain
//! sorted list (`manifest.txt`) and a JSON document with a generation
//! timestamp and count (`manifest.json`).
//!
//! # Pipeline
//!
//! ```text
//! 1. Walk       recipes/   →  absolute paths   (filter policy applied)
//! 2. Normalize  paths      →  "salads/greek.html"
//! 3. Sort       entries    →  English collation order
//! 4. Write      entries    →  manifest.txt + manifest.json
//! ```
//!
//! The whole tree is read before anything is written. A failed scan leaves
//! the previous manifest in place; a successful one overwrites both files
//! from the same in-memory list.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Scan root, extension, ignore sets, output locations; TOML loading |
//! | [`filter`] | Per-name predicates: descend into a directory, include a file |
//! | [`walk`] | Depth-first walk that applies the filter policy |
//! | [`paths`] | Root-relative, forward-slash entry strings |
//! | [`collate`] | English (`en`) collation of entries, fixed regardless of host locale |
//! | [`scan`] | Root check + walk + normalize + sort |
//! | [`manifest`] | Text and JSON renderings and the write step |
//! | [`output`] | CLI summary formatting |

pub mod collate;
pub mod config;
pub mod filter;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod scan;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
