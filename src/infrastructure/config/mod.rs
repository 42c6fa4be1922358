//! Application configuration.

/// Configuration model.
pub mod app_config;
/// Command-line flags.
pub mod args;
/// Config file loading.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
