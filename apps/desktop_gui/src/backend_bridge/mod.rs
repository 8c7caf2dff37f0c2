//! Backend bridge: the tokio runtime that runs panel actions off the UI thread.

pub mod commands;
pub mod runtime;
