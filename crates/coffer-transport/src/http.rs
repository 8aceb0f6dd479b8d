//! HTTP transport implementation using `reqwest`.

use std::io;

use crate::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

/// A `reqwest`-backed [`HttpTransport`].
///
/// `reqwest::Client` pools connections internally and is cheap to clone,
/// so one transport can serve every gateway in the process.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client (custom TLS roots, proxies, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let url = reqwest::Url::parse(&request.url).map_err(|e| {
            TransportError::InvalidRequest(format!("{}: {e}", request.url))
        })?;

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(send_error)?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::ReceiveFailed(io::Error::other(e)))?;

        tracing::trace!(
            method = %request.method,
            url = %request.url,
            status,
            bytes = body.len(),
            "http round trip"
        );

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Invalid header names or values only surface when the request is sent,
/// as builder errors.
fn send_error(e: reqwest::Error) -> TransportError {
    if e.is_builder() {
        return TransportError::InvalidRequest(e.to_string());
    }
    let kind = if e.is_connect() {
        io::ErrorKind::ConnectionRefused
    } else if e.is_timeout() {
        io::ErrorKind::TimedOut
    } else {
        io::ErrorKind::Other
    };
    TransportError::SendFailed(io::Error::new(kind, e))
}
