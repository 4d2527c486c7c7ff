use std::path::{Path, PathBuf};

use anyhow::Result;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info, warn};

use crate::catalog::database_file;
use crate::error::StoreError;
use crate::models::{BibleInfo, Verse};

use super::books::{count_chapters, fetch_books};
use super::verses::fetch_verses;

/// Exclusive owner of one open, read-only translation database. Dropping the
/// handle closes the connection.
#[derive(Debug)]
pub struct Handle {
    identifier: String,
    path: PathBuf,
    conn: Connection,
}

impl Handle {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection explicitly so a failure can at least be logged.
    fn close(self) {
        let identifier = self.identifier;
        if let Err((_, err)) = self.conn.close() {
            warn!(%identifier, error = %err, "closing translation database failed");
        } else {
            debug!(%identifier, "closed translation database");
        }
    }
}

/// Read-only access to the installed translations, holding at most one open
/// database at a time.
#[derive(Debug)]
pub struct VerseStore {
    books_dir: PathBuf,
    handle: Option<Handle>,
}

impl VerseStore {
    pub fn new(books_dir: impl Into<PathBuf>) -> Self {
        Self {
            books_dir: books_dir.into(),
            handle: None,
        }
    }

    pub fn books_dir(&self) -> &Path {
        &self.books_dir
    }

    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    pub fn active_identifier(&self) -> Option<&str> {
        self.handle.as_ref().map(Handle::identifier)
    }

    /// Open the translation named `identifier`, releasing the current one first.
    ///
    /// The file lookup happens before anything is released, so a `NotFound`
    /// leaves the current handle open. Any later failure leaves the store with
    /// no handle at all.
    pub fn open(&mut self, identifier: &str) -> Result<&Handle, StoreError> {
        let path =
            database_file(&self.books_dir, identifier).ok_or_else(|| StoreError::NotFound {
                identifier: identifier.to_string(),
                dir: self.books_dir.clone(),
            })?;

        self.close();

        let handle = open_read_only(identifier, path)?;
        info!(identifier, path = %handle.path.display(), "opened translation database");
        Ok(self.handle.insert(handle))
    }

    pub fn close(&mut self) {
        if let Some(previous) = self.handle.take() {
            previous.close();
        }
    }

    /// Books of the open translation ordered by book number; empty when no
    /// translation is open.
    pub fn list_books(&self) -> Result<Vec<BibleInfo>> {
        match &self.handle {
            Some(handle) => fetch_books(handle.conn()),
            None => Ok(Vec::new()),
        }
    }

    /// Number of distinct chapters stored for `book_id`. `None` means no
    /// translation is open, so the count is unknown.
    pub fn chapter_count(&self, book_id: i64) -> Result<Option<u32>> {
        match &self.handle {
            Some(handle) => count_chapters(handle.conn(), book_id).map(Some),
            None => Ok(None),
        }
    }

    /// Sanitized verses of one chapter ordered by verse number; empty when no
    /// translation is open or the chapter has no rows.
    pub fn verses(&self, book_id: i64, chapter: u32) -> Result<Vec<Verse>> {
        match &self.handle {
            Some(handle) => fetch_verses(handle.conn(), book_id, chapter),
            None => Ok(Vec::new()),
        }
    }
}

fn open_read_only(identifier: &str, path: PathBuf) -> Result<Handle, StoreError> {
    let open_error = |source| StoreError::Open {
        identifier: identifier.to_string(),
        path: path.clone(),
        source,
    };

    let conn = Connection::open_with_flags(
        &path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(open_error)?;

    // SQLite opens lazily; reading the schema surfaces corrupt or foreign files.
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'table' AND name IN ('books', 'verses')",
            [],
            |row| row.get(0),
        )
        .map_err(open_error)?;

    if tables < 2 {
        return Err(StoreError::Incompatible {
            identifier: identifier.to_string(),
            path,
        });
    }

    Ok(Handle {
        identifier: identifier.to_string(),
        path,
        conn,
    })
}
