//! Configuration for the hero client.
//!
//! Loaded from environment variables; the CLI can override individual
//! values with flags.

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the hero API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Settings for reaching the hero API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API server, without the `/api/heroes` suffix.
    pub api_url: String,
    /// Upper bound on a single request, connect through body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `HEROES_API_URL` -- API base URL (default `http://127.0.0.1:8080`)
    /// - `HEROES_TIMEOUT_MS` -- request timeout in milliseconds (default 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("HEROES_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let api_url = validate_api_url(&api_url)?;

        let timeout_ms = match lookup("HEROES_TIMEOUT_MS") {
            Some(raw) => parse_timeout_ms(&raw)?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Check that `raw` looks like an HTTP base URL and strip trailing slashes.
pub fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            name: "HEROES_API_URL",
            reason: format!("expected an http(s) URL, got {raw:?}"),
        });
    }
    Ok(trimmed.to_owned())
}

/// Parse a timeout in milliseconds; zero is rejected.
pub fn parse_timeout_ms(raw: &str) -> Result<u64, ConfigError> {
    let ms: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
        name: "HEROES_TIMEOUT_MS",
        reason: format!("{e}"),
    })?;
    if ms == 0 {
        return Err(ConfigError::Invalid {
            name: "HEROES_TIMEOUT_MS",
            reason: String::from("must be greater than zero"),
        });
    }
    Ok(ms)
}
