//! Core library surface for the Bible projector console.
//!
//! The lookup and navigation pieces are usable without the terminal UI so the
//! `bin` target, the integration tests and other front-ends share one
//! implementation.
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod projector;
pub mod session;
pub mod text;
pub mod ui;

/// Read-only access to the installed translation databases.
pub use db::{Handle, VerseStore};

pub use catalog::{available_identifiers, BookCatalog};
pub use error::StoreError;
pub use models::{BibleInfo, CatalogEntry, NavigationPosition, Verse};
pub use navigation::{Landing, NavigationState, Step};
pub use projector::Projector;
pub use session::Session;
pub use text::sanitize_verse_text;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
