//! Transport doubles shared by the contract tests
//!
//! None of these touch the network. Each records what the client asked for so
//! tests can assert on the requests as well as the results.

#![allow(dead_code)]

use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use strawpoll_core::{BoxError, ClientConfig, HttpRequest, HttpResponse, PollClient, Transport};

/// Endpoint used by every contract test
pub const TEST_ENDPOINT: &str = "http://polls.test/api/v2/polls";

/// Body from the service documentation for poll 5
pub const POLL_5_BODY: &str = r#"{"id":5,"title":"T","options":["a","b"],"votes":[1,2],"multi":false,"dupcheck":"normal","captcha":false}"#;

/// What the stub should answer with
#[derive(Debug, Clone)]
pub enum Reply {
    /// A response with this status and body
    Status(u16, &'static str),
    /// A 200 whose body yields `prefix` and then fails
    Truncated(&'static str),
    /// The request never gets a response
    SendFails(&'static str),
}

/// A transport that replays one scripted reply and records every request
pub struct StubTransport {
    reply: Reply,
    send_call_count: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            send_call_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shorthand for a 200 with a body
    pub fn ok(body: &'static str) -> Self {
        Self::new(Reply::Status(200, body))
    }

    /// Number of times send() was called
    pub fn send_call_count(&self) -> usize {
        self.send_call_count.load(Ordering::SeqCst)
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        self.send_call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match self.reply {
            Reply::Status(status, body) => Ok(HttpResponse::new(status, body.as_bytes())),
            Reply::Truncated(prefix) => Ok(HttpResponse::new(200, TruncatedBody::new(prefix))),
            Reply::SendFails(reason) => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                reason.to_string(),
            )
            .into()),
        }
    }

    fn transport_name(&self) -> &'static str {
        "stub"
    }
}

/// A transport that fails the test if it is ever used
pub struct NeverTransport;

impl Transport for NeverTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        panic!("transport must not be invoked, got {} {}", request.method, request.url);
    }

    fn transport_name(&self) -> &'static str {
        "never"
    }
}

/// Body reader that yields a prefix, then an I/O error
pub struct TruncatedBody {
    remaining: &'static [u8],
}

impl TruncatedBody {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            remaining: prefix.as_bytes(),
        }
    }
}

impl Read for TruncatedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed mid-body",
            ));
        }
        let n = self.remaining.read(buf)?;
        Ok(n)
    }
}

/// Build a client over a shared stub so the test keeps its handle
pub fn client_with(transport: &Arc<StubTransport>) -> PollClient {
    let config = ClientConfig::new().with_endpoint(TEST_ENDPOINT);
    PollClient::with_shared_transport(&config, transport.clone()).expect("valid test config")
}
