/// Errors that can occur in the transport layer.
///
/// None of these carry an HTTP status: a response with any status is a
/// successful round trip as far as the transport is concerned.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built (bad URL, invalid header).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Sending the request failed (connect, TLS, write).
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Reading the response body failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),
}
