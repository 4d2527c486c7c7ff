//! Typed failures raised when a translation database is opened. Lookups on an
//! open database go through `anyhow`, but switching translations needs a value
//! the caller can match on to decide whether to roll the selection back.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No `<identifier>.SQLite3` file exists in the books directory.
    #[error("translation {identifier} is not installed in {}", dir.display())]
    NotFound { identifier: String, dir: PathBuf },

    /// The file exists but SQLite refused to open or read it.
    #[error("failed to open translation {identifier} at {}", path.display())]
    Open {
        identifier: String,
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The file is a database but lacks the `books` or `verses` table.
    #[error("translation {identifier} at {} is not a verse database", path.display())]
    Incompatible { identifier: String, path: PathBuf },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn identifier(&self) -> &str {
        match self {
            StoreError::NotFound { identifier, .. }
            | StoreError::Open { identifier, .. }
            | StoreError::Incompatible { identifier, .. } => identifier,
        }
    }
}
