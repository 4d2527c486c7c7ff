#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

pub struct Book<'a> {
    pub id: i64,
    pub short_name: &'a str,
    pub long_name: &'a str,
    /// Verse texts per chapter, chapter 1 first.
    pub chapters: &'a [&'a [&'a str]],
}

/// Write `<identifier>.SQLite3` into `dir` with the given books.
pub fn write_translation(dir: &Path, identifier: &str, books: &[Book<'_>]) -> PathBuf {
    let path = dir.join(format!("{identifier}.SQLite3"));
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE books (book_number INTEGER, short_name TEXT, long_name TEXT);
         CREATE TABLE verses (book_number INTEGER, chapter INTEGER, verse INTEGER, text TEXT);",
    )
    .unwrap();
    for book in books {
        conn.execute(
            "INSERT INTO books VALUES (?1, ?2, ?3)",
            params![book.id, book.short_name, book.long_name],
        )
        .unwrap();
        for (chapter_index, verses) in book.chapters.iter().enumerate() {
            for (verse_index, text) in verses.iter().enumerate() {
                conn.execute(
                    "INSERT INTO verses VALUES (?1, ?2, ?3, ?4)",
                    params![
                        book.id,
                        chapter_index as i64 + 1,
                        verse_index as i64 + 1,
                        text
                    ],
                )
                .unwrap();
            }
        }
    }
    path
}

/// Genesis with chapters of 3, 2 and 4 verses plus a one-chapter Matthew.
pub fn write_ruf(dir: &Path) -> PathBuf {
    write_translation(
        dir,
        "RUF",
        &[
            Book {
                id: 10,
                short_name: "1Móz",
                long_name: "Mózes első könyve",
                chapters: &[
                    &[
                        "In the<pb/> beginning  God created",
                        "And the earth<f>[1]</f> was without form",
                        "And God said",
                    ],
                    &["Thus the heavens", "And on the seventh day"],
                    &["Now the serpent", "And the woman said", "But of the fruit", "And the serpent said"],
                ],
            },
            Book {
                id: 470,
                short_name: "Mt",
                long_name: "Máté",
                chapters: &[&["The book of the generation", "Abraham begat Isaac"]],
            },
        ],
    )
}

/// Genesis only, with two short chapters.
pub fn write_kb(dir: &Path) -> PathBuf {
    write_translation(
        dir,
        "KB",
        &[Book {
            id: 10,
            short_name: "1Móz",
            long_name: "Mózes I.",
            chapters: &[&["Kezdetben", "A föld pedig"], &["Így végezteték el"]],
        }],
    )
}

pub fn write_garbage(dir: &Path, identifier: &str) -> PathBuf {
    let path = dir.join(format!("{identifier}.SQLite3"));
    fs::write(&path, b"this is definitely not an sqlite database, just some bytes").unwrap();
    path
}

/// Has `books` and `verses` tables, but not the columns the queries read.
pub fn write_wrong_columns(dir: &Path, identifier: &str) -> PathBuf {
    let path = dir.join(format!("{identifier}.SQLite3"));
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE books (id INTEGER, title TEXT);
         CREATE TABLE verses (id INTEGER, body TEXT);",
    )
    .unwrap();
    path
}
