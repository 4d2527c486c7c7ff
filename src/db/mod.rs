//! Persistence module split across logical submodules: the connection owner and
//! the query helpers it delegates to.

mod books;
mod connection;
mod verses;

pub use books::{count_chapters, fetch_books};
pub use connection::{Handle, VerseStore};
pub use verses::fetch_verses;
