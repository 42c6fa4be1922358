use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mockgallery::application::{PlatformServices, services::AlertQueue};
use mockgallery::infrastructure::{
    AppConfig, CliArgs, ClipboardService, StorageManager, ThreadRandom,
};
use mockgallery::presentation::App;
use mockgallery::presentation::ui::{ScreenKind, catalog};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app(args: CliArgs) -> Result<App> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = mockgallery::VERSION, "Starting Mockgallery");

    let start_screen = config
        .start_screen
        .as_deref()
        .map(|name| {
            ScreenKind::from_name(name)
                .ok_or_else(|| eyre!("unknown screen `{name}`, see --list"))
        })
        .transpose()?;

    let alerts = AlertQueue::new(Duration::from_secs(config.ui.alert_duration));
    let services = PlatformServices::new(
        Arc::new(ClipboardService::new()),
        Arc::new(alerts.clone()),
        Arc::new(ThreadRandom::new()),
    );

    let mut app = App::new(&config, services, alerts);
    if let Some(kind) = start_screen {
        app.open(kind);
    }

    Ok(app)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    if args.list {
        println!("{}", serde_json::to_string_pretty(&catalog())?);
        return Ok(());
    }

    let app = create_app(args)?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
