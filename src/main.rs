//! Gîte Pricing Server
//!
//! REST API server for vacation-rental pricing and concierge revenue estimates.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use gite_pricing_server::{api, config::{AppConfig, LoggingConfig}, repository::Repository, AppState};

/// Install the tracing subscriber. The returned guard flushes the log file on drop.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("gite_pricing_server={},tower_http=debug", logging.level).into());

    let stdout = match logging.format.as_str() {
        "json" => fmt::layer().json().boxed(),
        _ => fmt::layer().pretty().boxed(),
    };

    let (file, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "gite-pricing-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(file)
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Gîte Pricing Server v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    tokio::fs::create_dir_all(&config.storage.settings_dir)
        .await
        .with_context(|| format!("Cannot create settings directory {}", config.storage.settings_dir.display()))?;
    tracing::info!("Settings stored in {}", config.storage.settings_dir.display());

    // Create repository, services and application state
    let repository = Repository::with_directory(config.storage.settings_dir.clone());
    let state = AppState::new(config, repository);

    // Build router
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
