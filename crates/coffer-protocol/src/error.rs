//! Error types for the protocol layer.
//!
//! Two very different things live here. [`ProtocolError`] is a local
//! failure to turn values into bytes or back. [`ApiError`] is the backend
//! telling us "no": a non-2xx response reduced to one human-readable
//! message.

use serde_json::Value;

/// Fallback message when a failure body isn't valid JSON.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Errors that can occur while encoding or decoding bodies.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, missing fields, or the
    /// wrong shape entirely.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}

/// A rejection reported by the backend.
///
/// `Display` prints only `message`, which is what callers show to the
/// player. `status` is kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Builds the error for a failed response.
    ///
    /// The message is picked in this order:
    /// 1. body isn't JSON → [`UNKNOWN_ERROR_MESSAGE`]
    /// 2. `detail` is a non-empty string → that string
    /// 3. `detail` is any other value except `null`, `false` or zero
    ///    (FastAPI validation errors are arrays) → its compact JSON text
    /// 4. otherwise → `HTTP {status}`
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let detail = match serde_json::from_slice::<Value>(body) {
            Ok(parsed) => parsed.get("detail").and_then(detail_message),
            Err(_) => Some(UNKNOWN_ERROR_MESSAGE.to_string()),
        };

        Self {
            status,
            message: detail.unwrap_or_else(|| format!("HTTP {status}")),
        }
    }
}

/// Reduces a `detail` value to a message, or `None` if it carries nothing.
fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_detail_string() {
        let err = ApiError::from_response(400, br#"{"detail":"Insufficient funds"}"#);
        assert_eq!(err.message, "Insufficient funds");
        assert_eq!(err.status, 400);
        assert_eq!(err.to_string(), "Insufficient funds");
    }

    #[test]
    fn test_from_response_non_json_body_uses_unknown_error() {
        let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.message, UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_from_response_empty_body_uses_unknown_error() {
        let err = ApiError::from_response(500, b"");
        assert_eq!(err.message, "Unknown error");
    }

    #[test]
    fn test_from_response_missing_detail_uses_status() {
        let err = ApiError::from_response(503, br#"{"error":"down"}"#);
        assert_eq!(err.message, "HTTP 503");
    }

    #[test]
    fn test_from_response_null_or_empty_detail_uses_status() {
        assert_eq!(ApiError::from_response(404, br#"{"detail":null}"#).message, "HTTP 404");
        assert_eq!(ApiError::from_response(404, br#"{"detail":""}"#).message, "HTTP 404");
    }

    #[test]
    fn test_from_response_falsy_detail_uses_status() {
        assert_eq!(ApiError::from_response(400, br#"{"detail":false}"#).message, "HTTP 400");
        assert_eq!(ApiError::from_response(400, br#"{"detail":0}"#).message, "HTTP 400");
        assert_eq!(ApiError::from_response(400, br#"{"detail":0.0}"#).message, "HTTP 400");
    }

    #[test]
    fn test_from_response_truthy_scalar_detail_is_stringified() {
        assert_eq!(ApiError::from_response(400, br#"{"detail":true}"#).message, "true");
        assert_eq!(ApiError::from_response(400, br#"{"detail":7}"#).message, "7");
    }

    #[test]
    fn test_from_response_json_array_body_uses_status() {
        // Valid JSON but not an object: no `detail` to read.
        let err = ApiError::from_response(500, b"[1,2]");
        assert_eq!(err.message, "HTTP 500");
    }

    #[test]
    fn test_from_response_structured_detail_is_stringified() {
        let err = ApiError::from_response(
            422,
            br#"{"detail":[{"loc":["body","amount"],"msg":"field required"}]}"#,
        );
        assert_eq!(
            err.message,
            r#"[{"loc":["body","amount"],"msg":"field required"}]"#
        );
    }
}
