//! User interface module
//!
//! Terminal UI using ratatui.

pub mod app;

pub use app::App;
