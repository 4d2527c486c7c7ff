use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::Verse;
use crate::text::sanitize_verse_text;

/// Load one chapter ordered by verse number, cleaning each text on the way out.
/// A chapter with no rows is simply an empty list.
pub fn fetch_verses(conn: &Connection, book_id: i64, chapter: u32) -> Result<Vec<Verse>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT verse, text FROM verses
             WHERE book_number = ?1 AND chapter = ?2
             ORDER BY verse",
        )
        .context("failed to prepare verse query")?;

    let verses = stmt
        .query_map(params![book_id, chapter], |row| {
            let raw: Option<String> = row.get(1)?;
            Ok(Verse {
                number: row.get(0)?,
                text: sanitize_verse_text(raw.as_deref().unwrap_or_default()),
            })
        })
        .context("failed to iterate verses")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect verses")?;

    Ok(verses)
}
