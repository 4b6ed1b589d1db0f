//! Entry point for the mock hero API server.
//!
//! Reads `HEROES_HOST`, `HEROES_PORT` and `HEROES_SEED`, then serves the
//! hero API until `Ctrl-C`.

use std::sync::Arc;

use heroes_server::{ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("heroes-server starting");

    let config = ServerConfig::from_env()?;
    info!(
        host = %config.host,
        port = config.port,
        seed = config.seed,
        "configuration loaded"
    );

    let state = Arc::new(config.initial_state());
    start_server(&config, state).await?;

    Ok(())
}
