// # strawpoll-core
//
// Core library for the Strawpoll v2 polls API client.
//
// ## Overview
//
// - **PollClient**: Fetch a poll by id, create a new poll
// - **Transport**: Trait for the HTTP stack that carries the requests
// - **ClientConfig**: Endpoint, timeouts and user agent
// - **Error**: One variant per failure step (input, encode, send, status,
//   body read, decode)
//
// This crate has no HTTP dependency of its own. The production transport
// lives in `strawpoll-http`; tests inject their own.
//
// ## Usage
//
// ```rust,ignore
// use strawpoll_core::{ClientConfig, PollClient, PollCreation, PollQuery};
//
// let client = PollClient::with_transport(&ClientConfig::default(), transport)?;
// let poll = client.fetch_poll(&PollQuery::new(1))?;
// let created = client.create_poll(&PollCreation::new("Lunch?", ["Pizza", "Sushi"]))?;
// ```

pub mod client;
pub mod config;
pub mod error;
pub mod poll;
pub mod traits;

// Re-export core types for convenience
pub use client::PollClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{BoxError, Error, Result};
pub use poll::{CreatedPoll, PollCreation, PollQuery, PollRecord, dupcheck};
pub use traits::{HttpRequest, HttpResponse, Method, Transport};
