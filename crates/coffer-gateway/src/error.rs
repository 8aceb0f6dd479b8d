//! Error type for the gateway.

use std::time::Duration;

use coffer_protocol::{ApiError, ProtocolError};
use coffer_transport::TransportError;

/// Everything a gateway call can fail with.
///
/// Callers usually just print the error: every variant's `Display` is a
/// human-readable message, and for [`GatewayError::Api`] it is exactly the
/// backend's `detail`.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The round trip itself failed (connect, send, receive).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A request body couldn't be encoded, or a 2xx body couldn't be
    /// parsed into the expected shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The configured request timeout elapsed.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl GatewayError {
    /// The backend rejection, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
