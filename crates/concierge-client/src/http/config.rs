//! HTTP backend configuration.

use std::time::Duration;

/// Where to send chat requests and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackendConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl HttpBackendConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000/chat")
    }
}
