//! Error types for the Strawpoll client
//!
//! Every failure of a poll operation surfaces as one variant of [`Error`].
//! Underlying causes stay attached and are reachable through
//! [`std::error::Error::source`].

use thiserror::Error;

/// Result type alias for Strawpoll operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a [`Transport`](crate::traits::Transport)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for the Strawpoll client
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-side input rejected before any network activity
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request payload could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request could not be sent (DNS, connect, TLS, timeout)
    #[error("Failed to send request: {0}")]
    Transport(#[source] BoxError),

    /// The service answered with a non-200 status
    #[error("Request failed: {status}{}", reason_suffix(.reason))]
    Remote {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase, when known
        reason: Option<String>,
    },

    /// The response body could not be read in full
    #[error("Could not read response body: {0}")]
    BodyRead(#[source] std::io::Error),

    /// The response body is not the expected JSON document
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Client configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason.as_deref().map(|r| format!(" {}", r)).unwrap_or_default()
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a remote error from a status code and optional reason phrase
    pub fn remote(status: u16, reason: Option<String>) -> Self {
        Self::Remote { status, reason }
    }

    /// Create a transport error from any underlying cause
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// HTTP status carried by a [`Error::Remote`]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the same call might succeed
    ///
    /// Transport failures, rate limiting (429) and server errors (5xx) are
    /// retryable. Everything else will fail the same way again. The client
    /// itself never retries; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Remote { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::InvalidInput(_)
            | Self::Encode(_)
            | Self::BodyRead(_)
            | Self::Decode(_)
            | Self::Config(_) => false,
        }
    }
}
