//! The book/chapter/verse cursor shared by the operator console and the
//! projector. Transitions are pure index arithmetic driven by counts the caller
//! supplies after each list repopulation; this module never queries the store.

use crate::models::NavigationPosition;

/// Where the verse cursor should land once a freshly entered chapter has been
/// loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    First,
    Last,
}

/// Outcome of a next/previous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor stayed put (first verse of chapter one, last verse of the
    /// last chapter, or nothing selected).
    Stay,
    /// Moved within the current chapter.
    Verse,
    /// Moved into another chapter. The caller must reload that chapter's verses
    /// and then call [`NavigationState::land`].
    Chapter(Landing),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    book: Option<i64>,
    chapter: Option<u32>,
    verse: Option<usize>,
    pending: Option<Landing>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self) -> Option<i64> {
        self.book
    }

    /// Current chapter number, 1-based.
    pub fn chapter(&self) -> Option<u32> {
        self.chapter
    }

    /// Index of the current verse inside the loaded chapter list.
    pub fn verse_index(&self) -> Option<usize> {
        self.verse
    }

    /// Position in the chapter list, i.e. `chapter - 1`.
    pub fn chapter_index(&self) -> Option<usize> {
        self.chapter.map(|chapter| chapter as usize - 1)
    }

    pub fn position(&self) -> Option<NavigationPosition> {
        Some(NavigationPosition {
            book_id: self.book?,
            chapter: self.chapter?,
            verse_index: self.verse?,
        })
    }

    /// Back to "nothing selected".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_book(&mut self, book_id: i64) {
        self.book = Some(book_id);
        self.chapter = None;
        self.verse = None;
        self.pending = None;
    }

    /// Chapter numbers start at one; zero is ignored. Selecting a chapter
    /// without a book is a no-op.
    pub fn select_chapter(&mut self, chapter: u32) {
        if chapter == 0 || self.book.is_none() {
            return;
        }
        self.chapter = Some(chapter);
        self.verse = None;
        self.pending = None;
    }

    /// Ignored until a chapter is selected.
    pub fn select_verse(&mut self, verse_index: usize) {
        if self.chapter.is_none() {
            return;
        }
        self.verse = Some(verse_index);
        self.pending = None;
    }

    pub fn clear_verse(&mut self) {
        self.verse = None;
        self.pending = None;
    }

    /// Advance one verse, rolling over into the next chapter when the current
    /// one is exhausted.
    pub fn next_verse(
        &mut self,
        verse_count: usize,
        chapter_index: usize,
        chapter_count: usize,
    ) -> Step {
        if self.chapter.is_none() {
            return Step::Stay;
        }

        let candidate = match self.verse {
            Some(index) => index + 1,
            None => 0,
        };
        if candidate < verse_count {
            self.verse = Some(candidate);
            self.pending = None;
            return Step::Verse;
        }

        if chapter_index + 1 < chapter_count {
            self.chapter = Some(chapter_index as u32 + 2);
            self.verse = Some(0);
            self.pending = Some(Landing::First);
            return Step::Chapter(Landing::First);
        }

        Step::Stay
    }

    /// Step back one verse, rolling back into the previous chapter's last verse
    /// when already at the top of a chapter.
    pub fn prev_verse(&mut self, verse_count: usize, chapter_index: usize) -> Step {
        let Some(chapter) = self.chapter else {
            return Step::Stay;
        };

        if let Some(index) = self.verse {
            if index >= 1 {
                self.verse = Some((index - 1).min(verse_count.saturating_sub(1)));
                self.pending = None;
                return Step::Verse;
            }
        }

        if chapter > 1 && chapter_index >= 1 {
            self.chapter = Some(chapter_index as u32);
            self.verse = None;
            self.pending = Some(Landing::Last);
            return Step::Chapter(Landing::Last);
        }

        Step::Stay
    }

    /// Settle the verse cursor after a chapter change, given the length of the
    /// newly loaded verse list. An empty chapter leaves no verse selected.
    pub fn land(&mut self, landing: Landing, verse_count: usize) {
        self.pending = None;
        if verse_count == 0 {
            self.verse = None;
            return;
        }
        self.verse = Some(match landing {
            Landing::First => 0,
            Landing::Last => verse_count - 1,
        });
    }

    /// A chapter change still waiting for [`NavigationState::land`].
    pub fn pending_landing(&self) -> Option<Landing> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(book: i64, chapter: u32, verse: usize) -> NavigationState {
        let mut nav = NavigationState::new();
        nav.select_book(book);
        nav.select_chapter(chapter);
        nav.select_verse(verse);
        nav
    }

    fn snapshot(nav: &NavigationState) -> (Option<u32>, Option<usize>) {
        (nav.chapter(), nav.verse_index())
    }

    #[test]
    fn selecting_a_book_clears_chapter_and_verse() {
        let mut nav = at(1, 3, 4);
        nav.select_book(2);
        assert_eq!(nav.book(), Some(2));
        assert_eq!(snapshot(&nav), (None, None));
        assert_eq!(nav.position(), None);
    }

    #[test]
    fn selecting_a_chapter_clears_the_verse() {
        let mut nav = at(1, 3, 4);
        nav.select_chapter(5);
        assert_eq!(snapshot(&nav), (Some(5), None));
    }

    #[test]
    fn chapter_zero_and_orphan_selections_are_ignored() {
        let mut nav = at(1, 3, 4);
        nav.select_chapter(0);
        assert_eq!(snapshot(&nav), (Some(3), Some(4)));

        let mut empty = NavigationState::new();
        empty.select_chapter(2);
        empty.select_verse(1);
        assert_eq!(empty, NavigationState::new());
    }

    #[test]
    fn next_moves_within_chapter() {
        let mut nav = at(1, 1, 0);
        assert_eq!(nav.next_verse(3, 0, 3), Step::Verse);
        assert_eq!(snapshot(&nav), (Some(1), Some(1)));
    }

    #[test]
    fn next_rolls_over_into_following_chapter() {
        let mut nav = at(1, 1, 2);
        assert_eq!(nav.next_verse(3, 0, 3), Step::Chapter(Landing::First));
        assert_eq!(nav.position().map(|p| (p.chapter, p.verse_index)), Some((2, 0)));
        assert_eq!(nav.pending_landing(), Some(Landing::First));
    }

    #[test]
    fn next_at_very_end_is_a_no_op() {
        let mut nav = at(1, 3, 4);
        assert_eq!(nav.next_verse(5, 2, 3), Step::Stay);
        assert_eq!(snapshot(&nav), (Some(3), Some(4)));
    }

    #[test]
    fn next_without_verse_selects_first() {
        let mut nav = at(1, 2, 0);
        nav.clear_verse();
        assert_eq!(nav.next_verse(4, 1, 3), Step::Verse);
        assert_eq!(nav.verse_index(), Some(0));
    }

    #[test]
    fn prev_moves_within_chapter() {
        let mut nav = at(1, 2, 3);
        assert_eq!(nav.prev_verse(5, 1), Step::Verse);
        assert_eq!(snapshot(&nav), (Some(2), Some(2)));
    }

    #[test]
    fn prev_rolls_back_to_last_verse_of_previous_chapter() {
        let mut nav = at(1, 2, 0);
        assert_eq!(nav.prev_verse(5, 1), Step::Chapter(Landing::Last));
        assert_eq!(snapshot(&nav), (Some(1), None));

        nav.land(Landing::Last, 7);
        assert_eq!(snapshot(&nav), (Some(1), Some(6)));
        assert_eq!(nav.pending_landing(), None);
    }

    #[test]
    fn prev_at_very_start_is_a_no_op() {
        let mut nav = at(1, 1, 0);
        assert_eq!(nav.prev_verse(5, 0), Step::Stay);
        assert_eq!(snapshot(&nav), (Some(1), Some(0)));
    }

    #[test]
    fn landing_in_an_empty_chapter_selects_nothing() {
        let mut nav = at(1, 2, 0);
        nav.prev_verse(3, 1);
        nav.land(Landing::Last, 0);
        assert_eq!(snapshot(&nav), (Some(1), None));
    }

    #[test]
    fn next_then_prev_returns_to_start() {
        // Three chapters with 3, 4 and 2 verses.
        let lengths = [3usize, 4, 2];
        for chapter_index in 0..lengths.len() {
            for verse in 0..lengths[chapter_index] {
                let last_of_book =
                    chapter_index == lengths.len() - 1 && verse == lengths[chapter_index] - 1;
                if last_of_book {
                    continue;
                }
                let mut nav = at(1, chapter_index as u32 + 1, verse);
                let start = snapshot(&nav);

                match nav.next_verse(lengths[chapter_index], chapter_index, lengths.len()) {
                    Step::Chapter(landing) => nav.land(landing, lengths[chapter_index + 1]),
                    Step::Verse => {}
                    Step::Stay => panic!("unexpected stay at {start:?}"),
                }

                let current = nav.chapter_index().unwrap();
                match nav.prev_verse(lengths[current], current) {
                    Step::Chapter(landing) => nav.land(landing, lengths[current - 1]),
                    Step::Verse => {}
                    Step::Stay => panic!("unexpected stay after next from {start:?}"),
                }

                assert_eq!(snapshot(&nav), start);
            }
        }
    }
}
