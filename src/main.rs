//! raid - air raid alert notification service
//!
//! Loads and validates the service settings at startup. Any configuration
//! problem is fatal: the error is reported and the process exits with status 1.

use clap::Parser;
use raid::cli::Cli;
use raid::{Result, Settings, SettingsLoader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

type LogHandle = reload::Handle<EnvFilter, Registry>;

fn main() {
    // Initialize logging
    let log_handle = init_logging();

    // Parse command-line arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli, &log_handle) {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, log_handle: &LogHandle) -> Result<()> {
    info!("Starting raid");

    let loaded = SettingsLoader::new()?.ingest(&cli.config_source())?;
    info!("Loaded settings from {}", loaded.origin().display());

    let settings = loaded.resolve()?;
    apply_log_level(log_handle, &settings);
    log_summary(&settings);

    Ok(())
}

fn log_summary(settings: &Settings) {
    info!(
        channel = %settings.telegram_channel,
        timezone = %settings.timezone_name,
        bind = %settings.bind_address(),
        backlog_size = settings.backlog_size,
        "Settings ready"
    );
    debug!(?settings, local_time = %settings.now().format("%Y-%m-%d %H:%M:%S %Z"));
}

/// Raise the crate's log level from the debug/trace settings unless
/// RUST_LOG was given explicitly.
fn apply_log_level(log_handle: &LogHandle, settings: &Settings) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }

    if let Some(directive) = settings.log_directive() {
        if let Err(e) = log_handle.reload(EnvFilter::new(directive)) {
            warn!("Failed to apply log level {}: {}", directive, e);
        }
    }
}

fn init_logging() -> LogHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "raid=info".into());
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    handle
}
