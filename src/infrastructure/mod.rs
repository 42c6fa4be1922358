//! Infrastructure layer with platform adapters and configuration.

/// System clipboard adapter.
pub mod clipboard;
/// Application configuration.
pub mod config;
/// Random value adapter.
pub mod random;

pub use clipboard::ClipboardService;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use random::ThreadRandom;
