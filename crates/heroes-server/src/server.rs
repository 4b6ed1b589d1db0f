//! Hero API server lifecycle management.
//!
//! [`start_server`] binds the configured address and serves until
//! `Ctrl-C`. [`serve`] runs on a listener the caller already bound, which
//! is how tests get an ephemeral port.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the hero API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Whether to start with the default hero roster.
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `HEROES_HOST` -- bind address (default `0.0.0.0`)
    /// - `HEROES_PORT` -- TCP port (default 8080)
    /// - `HEROES_SEED` -- start with the default roster (default `true`)
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HEROES_HOST").unwrap_or(defaults.host);

        let port = match lookup("HEROES_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("invalid HEROES_PORT: {e}")))?,
            None => defaults.port,
        };

        let seed = match lookup("HEROES_SEED") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("invalid HEROES_SEED: {e}")))?,
            None => defaults.seed,
        };

        Ok(Self { host, port, seed })
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))
    }

    /// Fresh application state according to `seed`.
    pub fn initial_state(&self) -> AppState {
        if self.seed {
            AppState::new()
        } else {
            AppState::empty()
        }
    }
}

/// Start the hero API server.
///
/// Binds to the configured address and serves requests until `Ctrl-C`.
///
/// # Errors
///
/// Returns an error if the address is invalid, the TCP listener cannot
/// bind, or the server hits a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    serve_until(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until the process ends.
///
/// # Errors
///
/// Returns an error if the server hits a fatal I/O error.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    serve_until(listener, state, std::future::pending()).await
}

/// Serve on an already-bound listener until `shutdown` completes, then
/// finish in-flight requests and return.
///
/// # Errors
///
/// Returns an error if the server hits a fatal I/O error.
pub async fn serve_until<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("listener has no local address: {e}")))?;

    let router = build_router(state);

    info!(%addr, "hero API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("hero API stopped");
    Ok(())
}

/// Resolve on `Ctrl-C`. If the handler cannot be installed, never resolve.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}

/// Errors that can occur when starting or running the hero API server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).ok();
        assert_eq!(config, Some(ServerConfig::default()));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HEROES_HOST", "127.0.0.1"),
            ("HEROES_PORT", "9090"),
            ("HEROES_SEED", "false"),
        ]))
        .unwrap_or_default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert!(!config.seed);
        assert_eq!(config.socket_addr().ok().map(|a| a.port()), Some(9090));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("HEROES_PORT", "eighty")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("HEROES_SEED", "maybe")])).is_err());
    }

    #[tokio::test]
    async fn initial_state_follows_seed_flag() {
        let seeded = ServerConfig::default().initial_state();
        let empty = ServerConfig {
            seed: false,
            ..ServerConfig::default()
        }
        .initial_state();
        assert_eq!(seeded.heroes.read().await.len(), 9);
        assert!(empty.heroes.read().await.is_empty());
    }
}
