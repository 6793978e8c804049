//! Strawpoll API client
//!
//! [`PollClient`] exposes the two poll operations on top of an injected
//! [`Transport`]. Each call is a single linear sequence:
//!
//! ```text
//! validate ─▶ encode (POST only) ─▶ send ─▶ check status ─▶ read body ─▶ decode
//! ```
//!
//! Any step may short-circuit with an [`Error`]. Nothing is retried, cached or
//! shared between calls.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::poll::{CreatedPoll, PollCreation, PollQuery, PollRecord};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Blocking client for the Strawpoll v2 polls API
///
/// ## Threading
///
/// The client is immutable after construction. Clones share the same
/// transport, and concurrent calls from different threads are independent.
#[derive(Clone)]
pub struct PollClient {
    /// Base URL with trailing slashes removed
    endpoint: String,

    /// HTTP transport shared by all clones
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for PollClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollClient")
            .field("endpoint", &self.endpoint)
            .field("transport", &self.transport.transport_name())
            .finish()
    }
}

impl PollClient {
    /// Create a client that sends requests through `transport`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` does not validate.
    pub fn with_transport<T>(config: &ClientConfig, transport: T) -> Result<Self>
    where
        T: Transport + 'static,
    {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Create a client over a transport that is already shared
    pub fn with_shared_transport(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        config.validate()?;

        debug!(
            "Creating poll client (endpoint={}, transport={})",
            config.base_url(),
            transport.transport_name()
        );

        Ok(Self {
            endpoint: config.base_url().to_string(),
            transport,
        })
    }

    /// Base endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL of a single poll: `<endpoint>/<id>`
    pub fn poll_url(&self, id: u64) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Fetch a poll by identifier
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /api/v2/polls/:id
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`]: the query id is zero (nothing is sent)
    /// - [`Error::Transport`]: the request could not be sent
    /// - [`Error::Remote`]: the service answered with a status other than 200
    /// - [`Error::BodyRead`]: the response body could not be read in full
    /// - [`Error::Decode`]: the body is not a valid poll document
    pub fn fetch_poll(&self, query: &PollQuery) -> Result<PollRecord> {
        query.validate()?;

        let request = HttpRequest::get(self.poll_url(query.id));
        debug!("Fetching poll: {} {}", request.method, request.url);

        let response = self.transport.send(&request).map_err(Error::Transport)?;
        let record: PollRecord = read_json(&request, response)?;

        info!("Fetched poll {} ({} options)", record.id, record.options.len());
        Ok(record)
    }

    /// Create a new poll
    ///
    /// # API Call
    ///
    /// ```http
    /// POST /api/v2/polls
    /// Content-Type: application/json
    ///
    /// {"title": "...", "options": [...], "multi": false, "dupcheck": "", "captcha": false}
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`]: empty title or no options (nothing is sent)
    /// - [`Error::Encode`]: the payload could not be serialized
    /// - [`Error::Transport`], [`Error::Remote`], [`Error::BodyRead`],
    ///   [`Error::Decode`]: as for [`PollClient::fetch_poll`]
    pub fn create_poll(&self, creation: &PollCreation) -> Result<CreatedPoll> {
        creation.validate()?;

        let payload = serde_json::to_vec(creation).map_err(Error::Encode)?;
        let request = HttpRequest::post_json(self.endpoint.as_str(), payload);
        debug!(
            "Creating poll: {} {} ({} options)",
            request.method,
            request.url,
            creation.options.len()
        );

        let response = self.transport.send(&request).map_err(Error::Transport)?;
        let created: CreatedPoll = read_json(&request, response)?;

        info!("Created poll {}: {}", created.id, self.poll_url(created.id));
        Ok(created)
    }
}

/// Check the status, drain the body and decode it
///
/// `response` is consumed here, so its body is released on every return path.
fn read_json<T: DeserializeOwned>(request: &HttpRequest, mut response: HttpResponse) -> Result<T> {
    if !response.is_ok() {
        warn!(
            "{} {} failed with status {}",
            request.method, request.url, response.status
        );
        return Err(Error::remote(response.status, response.reason.take()));
    }

    let mut body = Vec::new();
    response.body.read_to_end(&mut body).map_err(Error::BodyRead)?;
    drop(response);

    debug!("Decoding {} byte response from {}", body.len(), request.url);
    serde_json::from_slice(&body).map_err(Error::Decode)
}
