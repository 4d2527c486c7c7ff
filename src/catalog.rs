//! Registry of known translation packs and discovery of the ones installed in
//! the local books directory. A translation counts as installed exactly when a
//! `<identifier>.SQLite3` file is present.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::CatalogEntry;

/// Extension of installed translation databases, compared case-insensitively.
pub const DATABASE_EXTENSION: &str = "SQLite3";

const BUILTIN_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        identifier: "HUNB",
        display_name: "Úf",
        source_url: "https://www.ph4.org/_dl.php?back=bbl&a=HUNB&b=mybible&c",
    },
    CatalogEntry {
        identifier: "KB",
        display_name: "Kar",
        source_url: "https://www.ph4.org/_dl.php?back=bbl&a=KB&b=mybible&c",
    },
    CatalogEntry {
        identifier: "KSZE",
        display_name: "RKar",
        source_url: "https://www.ph4.org/_dl.php?back=bbl&a=KSZE&b=mybible&c",
    },
    CatalogEntry {
        identifier: "RUF",
        display_name: "Rúf",
        source_url: "https://www.ph4.org/_dl.php?back=bbl&a=RUF&b=mybible&c",
    },
];

#[derive(Debug, Clone)]
pub struct BookCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BookCatalog {
    /// The translations this application knows how to label and where to get.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ENTRIES.to_vec())
    }

    /// Build a catalog from arbitrary entries. Later duplicates of an
    /// identifier are dropped so lookups stay unambiguous.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut seen = BTreeSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.identifier))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier)
    }

    /// Friendly name for a translation, or the identifier itself when the
    /// registry does not know it.
    pub fn resolve_display_name<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.get(identifier)
            .map(|entry| entry.display_name)
            .unwrap_or(identifier)
    }
}

/// Identifiers of every translation database found in `dir`. A missing
/// directory means nothing is installed yet.
pub fn available_identifiers(dir: &Path) -> Result<BTreeSet<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read books directory {}", dir.display()))
        }
    };

    let mut found = BTreeSet::new();
    for entry in entries {
        let entry = entry.context("failed to read books directory entry")?;
        let path = entry.path();
        if !path.is_file() || !has_database_extension(&path) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            found.insert(stem.to_string());
        }
    }

    Ok(found)
}

pub fn is_installed(dir: &Path, identifier: &str) -> bool {
    database_file(dir, identifier).is_some()
}

/// Locate the database file for `identifier`, tolerating any casing of the
/// extension. Identifiers that could escape the directory never match.
pub fn database_file(dir: &Path, identifier: &str) -> Option<PathBuf> {
    if identifier.is_empty()
        || identifier.contains(['/', '\\'])
        || identifier.starts_with('.')
    {
        return None;
    }

    let exact = dir.join(format!("{identifier}.{DATABASE_EXTENSION}"));
    if exact.is_file() {
        return Some(exact);
    }

    fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .find(|path| {
            path.is_file()
                && has_database_extension(path)
                && path.file_stem().and_then(|stem| stem.to_str()) == Some(identifier)
        })
}

fn has_database_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DATABASE_EXTENSION))
}
