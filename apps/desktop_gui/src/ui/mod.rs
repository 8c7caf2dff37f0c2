//! UI layer for the desktop panel: app shell and the three panel sections.

pub mod app;
pub mod panels;

pub use app::{LedgerPanelApp, StartupConfig};
