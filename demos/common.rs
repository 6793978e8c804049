// Shared environment handling for the demo binaries.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::env;
use strawpoll_core::{ClientConfig, PollClient};
use tracing::Level;

/// Install a fmt subscriber at `STRAWPOLL_LOG_LEVEL` (default: info)
pub fn init_logging() {
    let level = env::var("STRAWPOLL_LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt().with_max_level(level).init();
}

/// Client configuration from `STRAWPOLL_ENDPOINT` and `STRAWPOLL_TIMEOUT_SECS`
///
/// `STRAWPOLL_TIMEOUT_SECS=0` disables the request timeout.
pub fn config_from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Ok(endpoint) = env::var("STRAWPOLL_ENDPOINT") {
        config = config.with_endpoint(endpoint);
    }

    if let Ok(timeout) = env::var("STRAWPOLL_TIMEOUT_SECS") {
        let secs: u64 = timeout
            .parse()
            .with_context(|| format!("STRAWPOLL_TIMEOUT_SECS is not a number: {}", timeout))?;
        config = config.with_timeout_secs((secs > 0).then_some(secs));
    }

    Ok(config)
}

/// Build a reqwest-backed client from the environment
pub fn client_from_env() -> Result<PollClient> {
    let config = config_from_env()?;
    tracing::info!("Using endpoint {}", config.base_url());
    Ok(strawpoll_http::client(&config)?)
}

/// Parse a boolean flag such as `STRAWPOLL_MULTI=true`
pub fn flag(name: &str) -> Result<bool> {
    match env::var(name) {
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            other => anyhow::bail!("{} must be true or false, got '{}'", name, other),
        },
        Err(_) => Ok(false),
    }
}
