//! Client configuration
//!
//! The library reads no files and no environment variables. Callers build a
//! [`ClientConfig`] in code or deserialize one from their own configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Strawpoll v2 polls collection
pub const DEFAULT_ENDPOINT: &str = "https://strawpoll.me/api/v2/polls";

/// Default HTTP timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration shared by every call made through one client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the polls collection (`GET <endpoint>/<id>`, `POST <endpoint>`)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request deadline in seconds
    ///
    /// `None` means requests may block indefinitely on a hung service.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,

    /// Separate deadline for establishing the connection, in seconds
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,

    /// `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }

    /// Set the base endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout (`None` disables it)
    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout_secs(mut self, connect_timeout_secs: Option<u64>) -> Self {
        self.connect_timeout_secs = connect_timeout_secs;
        self
    }

    /// Set the `User-Agent` header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(crate::Error::config("Endpoint cannot be empty"));
        }
        let Some(rest) = endpoint
            .strip_prefix("https://")
            .or_else(|| endpoint.strip_prefix("http://"))
        else {
            return Err(crate::Error::config(format!(
                "Endpoint must be an http(s) URL: {}",
                endpoint
            )));
        };
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(crate::Error::config(format!(
                "Endpoint has no host: {}",
                endpoint
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(crate::Error::config("Timeout must be > 0 (use None to disable)"));
        }
        if self.connect_timeout_secs == Some(0) {
            return Err(crate::Error::config("Connect timeout must be > 0"));
        }
        Ok(())
    }

    /// Endpoint with surrounding whitespace and trailing slashes removed
    pub fn base_url(&self) -> &str {
        self.endpoint.trim().trim_end_matches('/')
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Connect timeout as a [`Duration`]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_user_agent() -> String {
    concat!("strawpoll/", env!("CARGO_PKG_VERSION")).to_string()
}
