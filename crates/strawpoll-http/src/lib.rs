// # reqwest Transport
//
// This crate provides the production `Transport` for the Strawpoll client,
// built on `reqwest::blocking`.
//
// ## Behaviour
//
// - One HTTP request per `send`, no retries
// - Request timeout and connect timeout taken from `ClientConfig`
// - Bodies are sent as `application/json`
// - Any received status is handed back; only a failure to get a response at
//   all is an error
// - The response body is streamed to the client, and dropping it returns the
//   connection to reqwest
//
// ## Usage
//
// ```rust,no_run
// use strawpoll_core::{ClientConfig, PollQuery};
//
// let client = strawpoll_http::client(&ClientConfig::default())?;
// let poll = client.fetch_poll(&PollQuery::new(1))?;
// println!("{}: {:?}", poll.title, poll.tally().collect::<Vec<_>>());
// # Ok::<(), strawpoll_core::Error>(())
// ```

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use strawpoll_core::{
    BoxError, ClientConfig, Error, HttpRequest, HttpResponse, Method, PollClient, Result, Transport,
};

const APPLICATION_JSON: &str = "application/json";

/// Transport backed by a blocking reqwest client
///
/// The inner client is built once and never reconfigured, so a single
/// transport can serve any number of threads.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport from client configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid or the HTTP
    /// stack cannot be initialised (for example, no TLS backend).
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(
            "Built reqwest transport (timeout={:?}, connect_timeout={:?})",
            config.timeout(),
            config.connect_timeout()
        );

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> std::result::Result<HttpResponse, BoxError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        }
        .header(ACCEPT, APPLICATION_JSON);

        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(body.clone());
        }

        let response = builder.send()?;

        let status = response.status();
        tracing::debug!("{} {} -> {}", request.method, request.url, status);

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body: Box::new(response),
        })
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}

/// Build a [`PollClient`] over a [`ReqwestTransport`]
pub fn client(config: &ClientConfig) -> Result<PollClient> {
    let transport = ReqwestTransport::from_config(config)?;
    PollClient::with_transport(config, transport)
}
