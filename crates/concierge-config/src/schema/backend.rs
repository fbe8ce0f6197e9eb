//! Chat backend connection settings.

use serde::{Deserialize, Serialize};

/// Where chat queries are sent and how long to wait for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Full URL of the chat endpoint, including the `/chat` path.
    pub url: String,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000/chat".into(),
            connect_timeout: 10,
            request_timeout: 60,
        }
    }
}
