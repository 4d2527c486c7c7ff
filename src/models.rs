//! Domain models that mirror rows of a translation database and get passed
//! between the store, the navigation cursor and the operator console. These
//! types stay light-weight data holders so other layers can focus on lookup
//! and presentation logic.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the `books` table of the currently open translation. The list is
/// reloaded every time the active database changes because book numbering and
/// names differ between translations.
pub struct BibleInfo {
    /// `book_number` from the database. Navigation addresses books by this
    /// value rather than by list position so filtering the list is harmless.
    pub id: i64,
    /// Abbreviation used in captions (for example `1Móz`).
    pub short_name: String,
    /// Full book title.
    pub long_name: String,
}

impl BibleInfo {
    /// Compose the `(short) long` label shown in the book list and matched by
    /// the book filter.
    pub fn full_name(&self) -> String {
        format!("({}) {}", self.short_name, self.long_name)
    }
}

impl fmt::Display for BibleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single verse with its text already sanitized. Verses are a read-only
/// projection of the stored text and never written back.
pub struct Verse {
    /// Verse number as stored, 1-based.
    pub number: i64,
    /// Text with markup tags and bracketed annotations removed.
    pub text: String,
}

impl Verse {
    /// Render the row used by the verse list and the projector: the number with
    /// a trailing dot, padded to five columns, then the text.
    pub fn display_line(&self) -> String {
        format!("{:<5} {}", format!("{}.", self.number), self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Registry entry describing a downloadable translation pack.
pub struct CatalogEntry {
    /// Short code that also names the database file (`RUF.SQLite3`).
    pub identifier: &'static str,
    /// Friendly label shown on the translation bar.
    pub display_name: &'static str,
    /// Where the zipped database can be fetched from.
    pub source_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A fully resolved cursor: book, 1-based chapter and 0-based verse index.
pub struct NavigationPosition {
    pub book_id: i64,
    pub chapter: u32,
    pub verse_index: usize,
}
