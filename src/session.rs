//! Operator-side wiring between the verse store, the navigation cursor and the
//! projector. Every selection goes through here so the loaded lists, the cursor
//! and the projected text never disagree.
//!
//! Translation switches follow one policy: a missing translation changes
//! nothing, a translation that fails to open is rolled back to the previous one
//! (cursor included), and a successful switch carries the cursor across as far
//! as the new translation has matching book, chapter and verse.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::catalog::{available_identifiers, BookCatalog};
use crate::db::VerseStore;
use crate::error::StoreError;
use crate::models::{BibleInfo, Verse};
use crate::navigation::{NavigationState, Step};
use crate::projector::Projector;

#[derive(Debug)]
pub struct Session {
    store: VerseStore,
    catalog: BookCatalog,
    nav: NavigationState,
    projector: Projector,
    books: Vec<BibleInfo>,
    chapter_count: u32,
    verses: Vec<Verse>,
}

impl Session {
    pub fn new(books_dir: impl Into<PathBuf>, catalog: BookCatalog) -> Self {
        Self {
            store: VerseStore::new(books_dir),
            catalog,
            nav: NavigationState::new(),
            projector: Projector::new(),
            books: Vec::new(),
            chapter_count: 0,
            verses: Vec::new(),
        }
    }

    pub fn store(&self) -> &VerseStore {
        &self.store
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn projector_mut(&mut self) -> &mut Projector {
        &mut self.projector
    }

    pub fn books(&self) -> &[BibleInfo] {
        &self.books
    }

    pub fn chapter_count(&self) -> u32 {
        self.chapter_count
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn active_identifier(&self) -> Option<&str> {
        self.store.active_identifier()
    }

    pub fn active_display_name(&self) -> Option<&str> {
        self.store
            .active_identifier()
            .map(|id| self.catalog.resolve_display_name(id))
    }

    pub fn current_book(&self) -> Option<&BibleInfo> {
        let id = self.nav.book()?;
        self.books.iter().find(|book| book.id == id)
    }

    pub fn current_verse(&self) -> Option<&Verse> {
        self.verses.get(self.nav.verse_index()?)
    }

    /// Identifiers of every installed translation, sorted.
    pub fn installed(&self) -> Result<BTreeSet<String>> {
        available_identifiers(self.store.books_dir())
    }

    /// Open the preferred translation when it is installed, otherwise the first
    /// installed one. Returns the identifier that ended up open.
    pub fn open_initial(&mut self, preferred: Option<&str>) -> Result<Option<String>> {
        let installed = self.installed()?;
        let choice = preferred
            .filter(|id| installed.contains(*id))
            .map(str::to_string)
            .or_else(|| installed.iter().next().cloned());

        if let Some(wanted) = preferred {
            if !installed.contains(wanted) {
                warn!(identifier = wanted, "preferred translation is not installed");
            }
        }

        let Some(identifier) = choice else {
            info!(dir = %self.store.books_dir().display(), "no translations installed");
            return Ok(None);
        };

        self.switch_translation(&identifier)?;
        Ok(Some(identifier))
    }

    /// Make `identifier` the active translation.
    pub fn switch_translation(&mut self, identifier: &str) -> Result<(), StoreError> {
        let previous = self.store.active_identifier().map(str::to_string);
        let snapshot = self.nav.clone();

        match self.store.open(identifier).map(|_| ()) {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                warn!(identifier, "translation switch skipped: not installed");
                return Err(err);
            }
            Err(err) => {
                warn!(identifier, error = %err, "translation switch failed, rolling back");
                self.roll_back(previous, snapshot);
                return Err(err);
            }
        }

        if let Err(err) = self.carry_cursor(&snapshot) {
            warn!(identifier, error = ?err, "translation unreadable, rolling back");
            let path = self
                .store
                .handle()
                .map(|handle| handle.path().to_path_buf())
                .unwrap_or_default();
            self.roll_back(previous, snapshot);
            return Err(StoreError::Incompatible {
                identifier: identifier.to_string(),
                path,
            });
        }

        info!(
            identifier,
            books = self.books.len(),
            position = ?self.nav.position(),
            "switched translation"
        );
        if self.current_verse().is_some() {
            self.present_current();
        } else {
            // The projected verse did not survive the switch.
            self.projector.clear();
        }
        Ok(())
    }

    fn roll_back(&mut self, previous: Option<String>, snapshot: NavigationState) {
        let Some(previous) = previous else {
            self.reset();
            return;
        };

        let restored = match self.store.open(&previous).map(|_| ()) {
            Ok(()) => self.carry_cursor(&snapshot),
            Err(err) => Err(err.into()),
        };

        match restored {
            Ok(()) => info!(identifier = %previous, "restored previous translation"),
            Err(err) => {
                error!(identifier = %previous, error = ?err, "could not restore previous translation");
                self.reset();
            }
        }
    }

    /// Nothing open, nothing selected, nothing projected.
    fn reset(&mut self) {
        self.store.close();
        self.clear_selection();
        self.projector.clear();
    }

    fn clear_selection(&mut self) {
        self.books.clear();
        self.nav.reset();
        self.chapter_count = 0;
        self.verses.clear();
    }

    /// Reload the book list and re-apply `target` as far as the open
    /// translation allows.
    fn carry_cursor(&mut self, target: &NavigationState) -> Result<()> {
        self.clear_selection();
        self.books = self.store.list_books()?;

        let Some(book) = target.book() else {
            return Ok(());
        };
        if !self.books.iter().any(|b| b.id == book) {
            debug!(book, "book missing from translation, cursor reset");
            return Ok(());
        }
        self.nav.select_book(book);
        self.chapter_count = self.store.chapter_count(book)?.unwrap_or(0);

        let Some(chapter) = target.chapter() else {
            return Ok(());
        };
        let chapter = chapter.min(self.chapter_count);
        if chapter == 0 {
            return Ok(());
        }
        self.nav.select_chapter(chapter);
        self.verses = self.store.verses(book, chapter)?;

        if let Some(index) = target.verse_index() {
            if index < self.verses.len() {
                self.nav.select_verse(index);
            }
        }
        Ok(())
    }

    /// Select a book by its book number. Unknown books are ignored.
    pub fn select_book(&mut self, book_id: i64) -> Result<()> {
        if !self.books.iter().any(|book| book.id == book_id) {
            debug!(book_id, "ignoring selection of unknown book");
            return Ok(());
        }
        self.nav.select_book(book_id);
        self.chapter_count = self.store.chapter_count(book_id)?.unwrap_or(0);
        self.verses.clear();
        debug!(book_id, chapters = self.chapter_count, "book selected");
        Ok(())
    }

    /// Select a 1-based chapter of the current book and load its verses.
    /// Chapters outside the book are ignored.
    pub fn select_chapter(&mut self, chapter: u32) -> Result<()> {
        let Some(book) = self.nav.book() else {
            return Ok(());
        };
        if chapter == 0 || chapter > self.chapter_count {
            debug!(chapter, "ignoring selection of chapter outside the book");
            return Ok(());
        }
        self.nav.select_chapter(chapter);
        self.verses = self.store.verses(book, chapter)?;
        debug!(book, chapter, verses = self.verses.len(), "chapter selected");
        Ok(())
    }

    /// Select a verse by its position in the loaded chapter and project it.
    pub fn select_verse(&mut self, verse_index: usize) {
        if verse_index >= self.verses.len() {
            return;
        }
        self.nav.select_verse(verse_index);
        self.present_current();
    }

    pub fn next_verse(&mut self) -> Result<Step> {
        let Some(chapter_index) = self.nav.chapter_index() else {
            return Ok(Step::Stay);
        };
        let step = self.nav.next_verse(
            self.verses.len(),
            chapter_index,
            self.chapter_count as usize,
        );
        self.follow(step)?;
        Ok(step)
    }

    pub fn prev_verse(&mut self) -> Result<Step> {
        let Some(chapter_index) = self.nav.chapter_index() else {
            return Ok(Step::Stay);
        };
        let step = self.nav.prev_verse(self.verses.len(), chapter_index);
        self.follow(step)?;
        Ok(step)
    }

    fn follow(&mut self, step: Step) -> Result<()> {
        if let Step::Chapter(landing) = step {
            if let (Some(book), Some(chapter)) = (self.nav.book(), self.nav.chapter()) {
                self.verses = self.store.verses(book, chapter)?;
            }
            self.nav.land(landing, self.verses.len());
        }
        if step != Step::Stay {
            self.present_current();
        }
        Ok(())
    }

    /// Push the current verse to the projector again.
    pub fn present_current(&mut self) {
        let (Some(verse), Some(footer)) = (self.current_verse(), self.footer()) else {
            return;
        };
        let line = verse.display_line();
        self.projector.render(line, Some(footer));
    }

    /// `"<short name> <chapter>"` for the current selection.
    pub fn caption(&self) -> Option<String> {
        let book = self.current_book()?;
        let chapter = self.nav.chapter()?;
        Some(format!("{} {}", book.short_name, chapter))
    }

    /// Caption plus the 1-based verse position, used under the projected text.
    pub fn footer(&self) -> Option<String> {
        let caption = self.caption()?;
        let verse = self.nav.verse_index()?;
        Some(format!("{}:{}", caption, verse + 1))
    }

    /// Books whose `(short) long` label contains `query`, ignoring case.
    pub fn filter_books(&self, query: &str) -> Vec<&BibleInfo> {
        let needle = query.trim().to_lowercase();
        self.books
            .iter()
            .filter(|book| needle.is_empty() || book.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Chapter numbers whose label starts with the typed text.
    pub fn chapter_prefix_matches(&self, text: &str) -> Vec<u32> {
        let text = text.trim();
        (1..=self.chapter_count)
            .filter(|chapter| chapter.to_string().starts_with(text))
            .collect()
    }

    /// Indices of verses whose list row starts with the typed text.
    pub fn verse_prefix_matches(&self, text: &str) -> Vec<usize> {
        let text = text.trim();
        self.verses
            .iter()
            .enumerate()
            .filter(|(_, verse)| verse.display_line().starts_with(text))
            .map(|(index, _)| index)
            .collect()
    }
}
