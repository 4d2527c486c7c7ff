mod common;

use bible_projector::{BookCatalog, Landing, NavigationPosition, Session, Step, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn setup() -> (TempDir, Session) {
    let dir = TempDir::new().unwrap();
    common::write_ruf(dir.path());
    common::write_kb(dir.path());
    let session = Session::new(dir.path(), BookCatalog::builtin());
    (dir, session)
}

/// RUF open with the cursor on Genesis `chapter`, verse `index`.
fn at(session: &mut Session, chapter: u32, index: usize) {
    session.switch_translation("RUF").unwrap();
    session.select_book(10).unwrap();
    session.select_chapter(chapter).unwrap();
    session.select_verse(index);
}

fn position(book_id: i64, chapter: u32, verse_index: usize) -> Option<NavigationPosition> {
    Some(NavigationPosition {
        book_id,
        chapter,
        verse_index,
    })
}

#[test]
fn opens_the_preferred_translation_or_the_first_installed() {
    let (_dir, mut session) = setup();
    assert_eq!(session.open_initial(Some("RUF")).unwrap().as_deref(), Some("RUF"));
    assert_eq!(session.active_display_name(), Some("Rúf"));

    let (_dir, mut session) = setup();
    assert_eq!(session.open_initial(Some("NOPE")).unwrap().as_deref(), Some("KB"));
}

#[test]
fn opening_with_nothing_installed_leaves_session_empty() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::new(dir.path().join("missing"), BookCatalog::builtin());

    assert_eq!(session.open_initial(None).unwrap(), None);
    assert_eq!(session.active_identifier(), None);
    assert!(session.books().is_empty());
}

#[test]
fn selecting_a_verse_projects_it() {
    let (_dir, mut session) = setup();
    at(&mut session, 1, 0);

    assert_eq!(session.caption().as_deref(), Some("1Móz 1"));
    let projector = session.projector();
    assert_eq!(projector.main_text(), "1.    In the beginning God created");
    assert_eq!(projector.footer(), Some("1Móz 1:1"));
}

#[test]
fn next_verse_rolls_into_the_following_chapter() {
    let (_dir, mut session) = setup();
    at(&mut session, 1, 2);

    assert_eq!(session.next_verse().unwrap(), Step::Chapter(Landing::First));
    assert_eq!(session.navigation().position(), position(10, 2, 0));
    assert_eq!(session.verses().len(), 2);
    assert_eq!(session.projector().footer(), Some("1Móz 2:1"));
    assert_eq!(session.projector().main_text(), "1.    Thus the heavens");
}

#[test]
fn prev_verse_rolls_back_to_the_last_verse() {
    let (_dir, mut session) = setup();
    at(&mut session, 3, 0);

    assert_eq!(session.prev_verse().unwrap(), Step::Chapter(Landing::Last));
    assert_eq!(session.navigation().position(), position(10, 2, 1));
    assert_eq!(session.projector().footer(), Some("1Móz 2:2"));
}

#[test]
fn movement_stops_at_the_ends_of_a_book() {
    let (_dir, mut session) = setup();
    at(&mut session, 3, 3);
    assert_eq!(session.next_verse().unwrap(), Step::Stay);
    assert_eq!(session.navigation().position(), position(10, 3, 3));

    at(&mut session, 1, 0);
    assert_eq!(session.prev_verse().unwrap(), Step::Stay);
    assert_eq!(session.navigation().position(), position(10, 1, 0));
}

#[test]
fn out_of_range_selections_are_ignored() {
    let (_dir, mut session) = setup();
    at(&mut session, 2, 1);

    session.select_chapter(9).unwrap();
    session.select_verse(7);
    session.select_book(999).unwrap();
    assert_eq!(session.navigation().position(), position(10, 2, 1));
}

#[test]
fn missing_translation_changes_nothing() {
    let (_dir, mut session) = setup();
    at(&mut session, 2, 1);

    let err = session.switch_translation("NOPE").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(session.active_identifier(), Some("RUF"));
    assert_eq!(session.navigation().position(), position(10, 2, 1));
    assert_eq!(session.verses().len(), 2);
}

#[test]
fn broken_translation_rolls_back_to_the_previous_one() {
    let (dir, mut session) = setup();
    common::write_garbage(dir.path(), "BAD");
    at(&mut session, 3, 2);

    let err = session.switch_translation("BAD").unwrap_err();
    assert!(matches!(err, StoreError::Open { .. }), "got {err:?}");
    assert_eq!(session.active_identifier(), Some("RUF"));
    assert_eq!(session.navigation().position(), position(10, 3, 2));
    assert_eq!(session.books().len(), 2);
    assert_eq!(session.verses().len(), 4);
}

#[test]
fn broken_first_translation_leaves_nothing_open() {
    let (dir, mut session) = setup();
    common::write_garbage(dir.path(), "BAD");

    assert!(session.switch_translation("BAD").is_err());
    assert_eq!(session.active_identifier(), None);
    assert_eq!(session.navigation().book(), None);
}

#[test]
fn switching_carries_the_cursor_across() {
    let (_dir, mut session) = setup();
    at(&mut session, 1, 1);

    session.switch_translation("KB").unwrap();
    assert_eq!(session.navigation().position(), position(10, 1, 1));
    assert_eq!(session.projector().main_text(), "2.    A föld pedig");
    assert_eq!(session.active_display_name(), Some("Kar"));
}

#[test]
fn switching_clamps_the_chapter_and_drops_missing_verses() {
    let (_dir, mut session) = setup();
    at(&mut session, 3, 3);

    session.switch_translation("KB").unwrap();
    let nav = session.navigation();
    assert_eq!(nav.book(), Some(10));
    assert_eq!(nav.chapter(), Some(2));
    assert_eq!(nav.verse_index(), None);
    assert_eq!(session.chapter_count(), 2);
    assert_eq!(session.projector().main_text(), "");
    assert_eq!(session.projector().footer(), None);
}

#[test]
fn switching_to_a_translation_without_the_book_resets_the_cursor() {
    let (_dir, mut session) = setup();
    session.switch_translation("RUF").unwrap();
    session.select_book(470).unwrap();
    session.select_chapter(1).unwrap();
    session.select_verse(0);
    assert_eq!(session.projector().footer(), Some("Mt 1:1"));

    session.switch_translation("KB").unwrap();
    assert_eq!(session.navigation().book(), None);
    assert_eq!(session.books().len(), 1);
    assert!(session.verses().is_empty());
    assert_eq!(session.projector().main_text(), "");
    assert_eq!(session.projector().footer(), None);
}

#[test]
fn failed_restore_resets_everything() {
    let (dir, mut session) = setup();
    common::write_garbage(dir.path(), "BAD");
    at(&mut session, 1, 0);
    std::fs::remove_file(dir.path().join("RUF.SQLite3")).unwrap();

    let err = session.switch_translation("BAD").unwrap_err();
    assert!(matches!(err, StoreError::Open { .. }), "got {err:?}");
    assert_eq!(session.active_identifier(), None);
    assert_eq!(session.navigation().book(), None);
    assert!(session.books().is_empty());
    assert!(session.verses().is_empty());
    assert_eq!(session.projector().main_text(), "");
    assert_eq!(session.projector().footer(), None);
}

#[test]
fn unreadable_tables_roll_back_as_incompatible() {
    let (dir, mut session) = setup();
    common::write_wrong_columns(dir.path(), "ODD");
    at(&mut session, 2, 1);

    let err = session.switch_translation("ODD").unwrap_err();
    assert!(matches!(err, StoreError::Incompatible { .. }), "got {err:?}");
    assert_eq!(err.identifier(), "ODD");
    assert_eq!(session.active_identifier(), Some("RUF"));
    assert_eq!(session.navigation().position(), position(10, 2, 1));
    assert_eq!(session.books().len(), 2);
    assert_eq!(session.projector().footer(), Some("1Móz 2:2"));
    assert_eq!(session.projector().main_text(), "2.    And on the seventh day");
}

#[test]
fn black_screen_suppresses_projection() {
    let (_dir, mut session) = setup();
    at(&mut session, 1, 0);

    assert!(session.projector_mut().toggle_black());
    session.next_verse().unwrap();
    assert_eq!(session.projector().main_text(), "");

    session.projector_mut().toggle_black();
    session.present_current();
    assert_eq!(session.projector().footer(), Some("1Móz 1:2"));
}

#[test]
fn book_filter_matches_either_name() {
    let (_dir, mut session) = setup();
    session.switch_translation("RUF").unwrap();

    let ids = |query: &str| -> Vec<i64> {
        session.filter_books(query).iter().map(|book| book.id).collect()
    };
    assert_eq!(ids(""), vec![10, 470]);
    assert_eq!(ids("máté"), vec![470]);
    assert_eq!(ids("MÓZ"), vec![10]);
    assert!(ids("xyz").is_empty());
}

#[test]
fn jump_prefixes_match_chapter_and_verse_labels() {
    let (_dir, mut session) = setup();
    at(&mut session, 3, 0);

    assert_eq!(session.chapter_prefix_matches("2"), vec![2]);
    assert_eq!(session.chapter_prefix_matches(""), vec![1, 2, 3]);
    assert_eq!(session.verse_prefix_matches("4"), vec![3]);
    assert!(session.verse_prefix_matches("5").is_empty());
}
