//! Locale-aware ordering of manifest entries.
//!
//! Entries are ordered by English collation (CLDR data through ICU4X), the
//! way a reader expects a file list to read rather than by raw code points:
//! `a.html` and `A.html` sit together ahead of `b.html`, `ćevapi.html` sorts
//! with the other `c` names, `straße.html` sits beside `strasse.html`, and
//! punctuation sorts ahead of digits and letters.
//!
//! The locale is fixed to `en` at the default (tertiary) strength, so the
//! order never depends on the locale of the machine generating the manifest.
//! Strings the collator considers equal fall back to raw string order, which
//! keeps the order strict and total.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("cannot load English collation data: {0}")]
pub struct CollateError(String);

/// English collator with a raw-order tie-break.
pub struct EntryCollator {
    collator: CollatorBorrowed<'static>,
}

impl EntryCollator {
    pub fn english() -> Result<Self, CollateError> {
        let collator = Collator::try_new(locale!("en").into(), CollatorOptions::default())
            .map_err(|e| CollateError(e.to_string()))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }

    /// Sort entries in place, ascending.
    pub fn sort(&self, entries: &mut [String]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

impl std::fmt::Debug for EntryCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryCollator").field("locale", &"en").finish()
    }
}
