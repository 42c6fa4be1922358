use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mockgallery",
    version,
    about = "A terminal gallery of UI components driven by mock view models",
    long_about = None
)]
/// Command-line flags. Set values override `config.toml`.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Open this screen directly (see --list).
    #[arg(short, long, value_name = "NAME")]
    pub screen: Option<String>,

    /// Show screen descriptions.
    #[arg(long)]
    pub show_descriptions: Option<bool>,

    /// Print the screen catalog as JSON and exit.
    #[arg(long)]
    pub list: bool,
}
