//! The per-call request description and its header merge rule.

use coffer_transport::Method;
use serde::Serialize;

use crate::{Codec, JsonCodec, ProtocolError};

/// Header name the default body type is sent under.
pub const CONTENT_TYPE: &str = "content-type";

/// One logical API call, before it's resolved against the API root.
///
/// Built fresh for every call and consumed by the gateway. `path` is
/// relative to the API root and already carries its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    pub method: Method,
    pub path: String,
    pub body: Option<Vec<u8>>,
    /// Caller-supplied headers. These win over the defaults.
    pub headers: Vec<(String, String)>,
}

impl RequestEnvelope {
    /// A bodiless GET.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// A POST with a JSON body.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if `body` can't be serialized.
    pub fn post_json<T: Serialize>(
        path: impl Into<String>,
        body: &T,
    ) -> Result<Self, ProtocolError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(JsonCodec.encode(body)?),
            headers: Vec::new(),
        })
    }

    /// Adds (or replaces) a caller header.
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into().to_ascii_lowercase();
        self.headers.retain(|(existing, _)| *existing != name);
        self.headers.push((name, value.into()));
        self
    }

    /// Returns the headers to send: the JSON content type first, then
    /// every caller header. Names are compared case-insensitively and a
    /// caller header replaces a default of the same name.
    pub fn merged_headers(&self, codec: &impl Codec) -> Vec<(String, String)> {
        let mut merged: Vec<(String, String)> =
            vec![(CONTENT_TYPE.to_string(), codec.content_type().to_string())];

        for (name, value) in &self.headers {
            let name = name.to_ascii_lowercase();
            match merged.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value.clone(),
                None => merged.push((name, value.clone())),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_headers_defaults_to_json_content_type() {
        let env = RequestEnvelope::get("/config");
        assert_eq!(
            env.merged_headers(&JsonCodec),
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_merged_headers_caller_override_wins() {
        let env = RequestEnvelope::get("/config")
            .with_header("Content-Type", "text/plain");

        let headers = env.merged_headers(&JsonCodec);

        assert_eq!(
            headers,
            vec![("content-type".to_string(), "text/plain".to_string())],
            "caller value must replace the default, not be sent alongside it"
        );
    }

    #[test]
    fn test_merged_headers_keeps_extra_caller_headers() {
        let env = RequestEnvelope::get("/config")
            .with_header("X-Trace", "abc")
            .with_header("Accept-Language", "ru");

        let headers = env.merged_headers(&JsonCodec);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers[0].0, "content-type");
        assert!(headers.contains(&("x-trace".to_string(), "abc".to_string())));
        assert!(headers.contains(&("accept-language".to_string(), "ru".to_string())));
    }

    #[test]
    fn test_with_header_same_name_twice_keeps_last() {
        let env = RequestEnvelope::get("/x")
            .with_header("X-Id", "1")
            .with_header("x-id", "2");
        assert_eq!(env.headers, vec![("x-id".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_post_json_encodes_body() {
        let env = RequestEnvelope::post_json("/qr/parse", &serde_json::json!({ "data": "LOGIN:A" }))
            .unwrap();
        assert_eq!(env.method, Method::Post);
        assert_eq!(env.body.as_deref(), Some(br#"{"data":"LOGIN:A"}"#.as_slice()));
    }
}
