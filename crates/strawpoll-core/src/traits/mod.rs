//! Core traits for the Strawpoll client
//!
//! - [`Transport`]: Send one HTTP request and hand back status and body

pub mod transport;

pub use transport::{HttpRequest, HttpResponse, Method, Transport};
