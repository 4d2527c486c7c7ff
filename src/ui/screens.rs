use std::path::Path;

use crate::catalog::{is_installed, BookCatalog};
use crate::models::{BibleInfo, CatalogEntry};

/// Keyboard focus inside the operator screen.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Focus {
    Books,
    Chapters,
    Verses,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::Books => Focus::Chapters,
            Focus::Chapters => Focus::Verses,
            Focus::Verses => Focus::Books,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Focus::Books => Focus::Verses,
            Focus::Chapters => Focus::Books,
            Focus::Verses => Focus::Chapters,
        }
    }
}

/// Rows of the book pane after the filter is applied. Rows hold book numbers
/// so the cursor can be matched back regardless of filtering.
#[derive(Default)]
pub(crate) struct BookPane {
    pub(crate) filter: Option<String>,
    pub(crate) rows: Vec<(i64, String)>,
    pub(crate) selected: usize,
}

impl BookPane {
    /// Replace the rows with an already filtered book list.
    pub(crate) fn set_rows<'a>(&mut self, books: impl IntoIterator<Item = &'a BibleInfo>) {
        self.rows = books
            .into_iter()
            .map(|book| (book.id, book.full_name()))
            .collect();
        self.ensure_in_bounds();
    }

    pub(crate) fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter;
        self.selected = 0;
    }

    pub(crate) fn current_book_id(&self) -> Option<i64> {
        self.rows.get(self.selected).map(|(id, _)| *id)
    }

    /// Point the highlight at `book_id` when it is visible.
    pub(crate) fn focus_book(&mut self, book_id: i64) {
        if let Some(index) = self.rows.iter().position(|(id, _)| *id == book_id) {
            self.selected = index;
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

pub(crate) struct CatalogRow {
    pub(crate) entry: CatalogEntry,
    pub(crate) installed: bool,
}

/// Registry listing with the installed state of each translation.
pub(crate) struct CatalogScreen {
    pub(crate) rows: Vec<CatalogRow>,
    pub(crate) selected: usize,
}

impl CatalogScreen {
    pub(crate) fn load(catalog: &BookCatalog, books_dir: &Path) -> Self {
        let rows = catalog
            .entries()
            .iter()
            .map(|entry| CatalogRow {
                entry: *entry,
                installed: is_installed(books_dir, entry.identifier),
            })
            .collect();
        Self { rows, selected: 0 }
    }

    pub(crate) fn current(&self) -> Option<&CatalogRow> {
        self.rows.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn display_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let state = if row.installed { "installed" } else { "missing" };
                format!(
                    "{:<6} {:<8} {:<10} {}",
                    row.entry.identifier, row.entry.display_name, state, row.entry.source_url
                )
            })
            .collect()
    }
}
