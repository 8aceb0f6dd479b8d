//! Transport abstraction layer for Coffer.
//!
//! Provides the [`HttpTransport`] trait that abstracts over whatever
//! actually puts bytes on the wire. The gateway above only ever sees
//! [`HttpRequest`] going out and [`HttpResponse`] coming back.
//!
//! # Feature Flags
//!
//! - `reqwest` (default): HTTP transport via `reqwest`
//! - `mock`: [`MockTransport`], a scripted transport for tests

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "reqwest")]
mod http;
#[cfg(feature = "mock")]
mod mock;

pub use error::TransportError;
#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;
#[cfg(feature = "mock")]
pub use mock::MockTransport;

use std::fmt;

/// HTTP method of an outgoing request.
///
/// The backend only speaks GET and POST, so that's all we model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    /// Returns the canonical upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-resolved request, ready to be sent.
///
/// `url` is absolute; header names are already merged and de-duplicated
/// by the layer above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// The raw response: status code plus body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for its response.
///
/// A transport never interprets the status code. A 404 or 500 is a
/// perfectly good `Ok(HttpResponse)` here; deciding what counts as a
/// failure is the gateway's job. `Err` means the round trip itself broke
/// (DNS, connection refused, truncated body).
///
/// # Trait bounds
///
/// - `Send + Sync` → one transport can be shared by every caller.
/// - `'static` → it owns its connection pool, no borrowed state.
pub trait HttpTransport: Send + Sync + 'static {
    /// Performs a single round trip.
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, TransportError>;
}
