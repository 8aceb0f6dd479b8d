//! Codec trait and the JSON implementation used for every body.
//!
//! The backend only speaks JSON, but keeping encode/decode behind a trait
//! means the envelope and the gateway never name `serde_json` directly
//! when turning bodies into bytes and back.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// Encodes Rust values to body bytes and decodes them back.
///
/// `decode` takes `DeserializeOwned` so the response buffer can be dropped
/// as soon as the value is built.
pub trait Codec: Send + Sync + 'static {
    /// The `content-type` this codec produces.
    fn content_type(&self) -> &'static str;

    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or
    /// don't match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// ```rust
/// use coffer_protocol::{Codec, JsonCodec, TransferRequest, PlayerUuid};
///
/// let body = TransferRequest {
///     from_uuid: PlayerUuid::new("A"),
///     to_uuid: PlayerUuid::new("B"),
///     amount: 10,
/// };
/// let bytes = JsonCodec.encode(&body).unwrap();
/// let back: TransferRequest = JsonCodec.decode(&bytes).unwrap();
/// assert_eq!(back, body);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
