//! UI layer for the desktop GUI: app shell, article table, and edit window.

pub mod app;

pub use app::{ArticleManagerApp, StartupConfig};
