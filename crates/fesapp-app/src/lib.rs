//! Application service layer - use cases, config, tariff tables, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;

/// Receives human-readable progress lines (wired to stderr in verbose mode)
pub type ProgressCallback = Box<dyn Fn(&str) + Send + Sync>;
