// # Transport Trait
//
// Defines the seam between the poll client and the HTTP stack.
//
// ## Implementations
//
// - reqwest (blocking): `strawpoll-http` crate
// - Test doubles: `tests/common/mod.rs`
//
// ## Resource Model
//
// A successful `send` hands over an `HttpResponse` that owns the response
// body. Dropping it releases the connection, so every exit path of the
// client releases it exactly once. A failed `send` returns no response, and
// there is nothing to release.

use crate::error::BoxError;
use std::fmt;
use std::io::Read;

/// HTTP method used by the poll API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Fetch a poll
    Get,
    /// Create a poll
    Post,
}

impl Method {
    /// Upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request
///
/// A request with a body is sent as `application/json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute target URL
    pub url: String,
    /// JSON payload, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    /// Create a POST request carrying a JSON payload
    pub fn post_json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Response handed back by a transport
///
/// The body is read lazily so that read failures stay distinguishable from
/// send failures.
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase, when known
    pub reason: Option<String>,
    /// Response body; dropping it releases the underlying connection
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    /// Create a response from a status code and a body reader
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            reason: None,
            body: Box::new(body),
        }
    }

    /// Attach the reason phrase
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Whether the status is the one the poll API uses for success
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("body", &"<stream>")
            .finish()
    }
}

/// Trait for HTTP transports
///
/// # Thread Safety
///
/// Implementations must be usable from many threads at once. A transport is
/// configured once and never mutated afterwards.
///
/// # Contract
///
/// - Send exactly one request per call. No retries, no redirects to other
///   hosts beyond what the HTTP stack does by default.
/// - Return `Err` only when no response was received. Any status code,
///   including 4xx and 5xx, is a successful send.
pub trait Transport: Send + Sync {
    /// Send one request and return the response head plus body reader
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError>;

    /// Transport name (for logging/debugging)
    fn transport_name(&self) -> &'static str;
}
