//! Ratatui operator console. The console is a thin driver over
//! [`crate::session::Session`]: key presses become session calls and every
//! frame is drawn from session state.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
