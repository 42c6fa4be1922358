//! Application configuration.

use crate::application::services::{FALLBACK_TIMESTAMP_FORMAT, is_valid_timestamp_format};
use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

pub(crate) const APP_NAME: &str = "mockgallery";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Screen opened at startup instead of the catalog.
    #[serde(skip)]
    pub start_screen: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Custom keybindings.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show each screen's description above the gallery.
    #[serde(default = "default_true")]
    pub show_descriptions: bool,

    /// Routed interactions kept in the observation panel.
    #[serde(default = "default_observation_log_size")]
    pub observation_log_size: usize,

    /// Timestamp format string (chrono format).
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Alert duration in seconds.
    #[serde(default = "default_alert_duration")]
    pub alert_duration: u64,
}

impl UiConfig {
    /// Replaces values chrono cannot render with their defaults.
    pub fn sanitize(&mut self) {
        if !is_valid_timestamp_format(&self.timestamp_format) {
            warn!(format = %self.timestamp_format, "Invalid timestamp format, using default");
            self.timestamp_format = default_timestamp_format();
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            observation_log_size: default_observation_log_size(),
            timestamp_format: default_timestamp_format(),
            alert_duration: default_alert_duration(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Color for success states such as copied codes (name or hex code).
    #[serde(default)]
    pub success_color: Option<String>,
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_timestamp_format() -> String {
    FALLBACK_TIMESTAMP_FORMAT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_observation_log_size() -> usize {
    8
}

fn default_alert_duration() -> u64 {
    4
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            success_color: None,
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(screen) = args.screen {
            self.start_screen = Some(screen);
        }
        if let Some(show_descriptions) = args.show_descriptions {
            self.ui.show_descriptions = show_descriptions;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("mockgallery.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            start_screen: None,
            log_level: LogLevel::Info,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{FALLBACK_TIMESTAMP_FORMAT, is_valid_timestamp_format};
use crate::domain::keybinding::Action;
    use clap::Parser;

    #[test]
    fn test_parse_config_with_sections() {
        let toml_content = r##"
            log_level = "debug"

            [ui]
            observation_log_size = 3
            timestamp_format = "%H:%M"

            [theme]
            accent_color = "#ff8800"

            [keybindings]
            "Ctrl+q" = "Quit"
            "h" = "Back"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ui.observation_log_size, 3);
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert!(config.ui.show_descriptions);
        assert_eq!(config.ui.alert_duration, 4);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.theme.success_color, None);

        assert_eq!(config.keybindings.len(), 2);
        assert_eq!(config.keybindings.get("Ctrl+q"), Some(&Action::Quit));
        assert_eq!(config.keybindings.get("h"), Some(&Action::Back));
    }

    #[test]
    fn test_invalid_timestamp_format_falls_back() {
        let mut config: AppConfig =
            toml::from_str("[ui]\ntimestamp_format = \"%H:%M %Q\"").expect("Failed to parse config");

        config.ui.sanitize();

        assert_eq!(config.ui.timestamp_format, "%H:%M:%S");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.keybindings.is_empty());
        assert!(config.ui.show_descriptions);
        assert_eq!(config.ui.observation_log_size, 8);
        assert_eq!(config.theme.accent_color, "Yellow");
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "mockgallery",
            "--log-level",
            "warn",
            "--accent-color",
            "Cyan",
            "--screen",
            "wallet",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.theme.accent_color, "Cyan");
        assert_eq!(config.start_screen.as_deref(), Some("wallet"));
        assert!(config.ui.show_descriptions);
    }
}
