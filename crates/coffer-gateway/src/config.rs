//! Gateway configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the API lives and how long a call may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Absolute URL every endpoint path is appended to, e.g.
    /// `http://localhost:8000/api`. A trailing slash is ignored.
    pub api_root: String,

    /// Upper bound on a single round trip. `None` waits forever.
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Default API root: the backend's development address.
    pub const DEFAULT_API_ROOT: &'static str = "http://localhost:8000/api";

    /// Config for the given root with no timeout.
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            request_timeout: None,
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Joins the root and an endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_root.trim_end_matches('/'), path)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_ROOT)
    }
}
