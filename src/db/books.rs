use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::BibleInfo;

/// Retrieve every book of the translation sorted by book number. The query is
/// the single source of truth for the order of the book list.
pub fn fetch_books(conn: &Connection) -> Result<Vec<BibleInfo>> {
    let mut stmt = conn
        .prepare("SELECT book_number, short_name, long_name FROM books ORDER BY book_number")
        .context("failed to prepare book query")?;

    let books = stmt
        .query_map([], |row| {
            Ok(BibleInfo {
                id: row.get(0)?,
                short_name: row.get(1)?,
                long_name: row.get(2)?,
            })
        })
        .context("failed to load books")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect books")?;

    Ok(books)
}

/// Count the distinct chapters stored for a book. Books missing from the
/// `verses` table count as zero chapters.
pub fn count_chapters(conn: &Connection, book_id: i64) -> Result<u32> {
    conn.query_row(
        "SELECT COUNT(DISTINCT chapter) FROM verses WHERE book_number = ?1",
        params![book_id],
        |row| row.get(0),
    )
    .context("failed to count chapters")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE books (book_number INTEGER, short_name TEXT, long_name TEXT);
             CREATE TABLE verses (book_number INTEGER, chapter INTEGER, verse INTEGER, text TEXT);
             INSERT INTO books VALUES (40, 'Mt', 'Matthew'), (10, 'Gen', 'Genesis');
             INSERT INTO verses VALUES
                 (10, 1, 1, 'a'), (10, 1, 2, 'b'), (10, 2, 1, 'c'), (10, 3, 1, 'd');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn books_come_back_in_book_number_order() {
        let conn = memory_db();
        let ids: Vec<i64> = fetch_books(&conn).unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![10, 40]);
    }

    #[test]
    fn chapters_are_counted_once_each() {
        let conn = memory_db();
        assert_eq!(count_chapters(&conn, 10).unwrap(), 3);
        assert_eq!(count_chapters(&conn, 40).unwrap(), 0);
    }
}
