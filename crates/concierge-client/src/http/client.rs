//! HTTP backend struct, error mapping, and reply decoding.

use crate::{ChatError, ChatReply};

use super::config::HttpBackendConfig;

/// Longest error-body excerpt kept for logs.
const MAX_DETAIL_CHARS: usize = 200;

/// Chat backend reached over HTTP.
pub struct HttpChatBackend {
    pub(crate) config: HttpBackendConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpChatBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ChatError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Decode a successful response body into a validated reply.
    pub(crate) fn parse_reply(body: &str) -> Result<ChatReply, ChatError> {
        let json: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| ChatError::Malformed(format!("invalid JSON: {e}")))?;
        ChatReply::from_value(json)
    }
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        ChatError::Timeout
    } else {
        ChatError::Network(err.to_string())
    }
}

/// Summarise an error body for logs.
///
/// FastAPI-style `{"detail": "..."}` bodies yield the detail string;
/// anything else is truncated to a short excerpt.
pub(crate) fn error_detail(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        match json.get("detail") {
            Some(serde_json::Value::String(s)) => return s.clone(),
            Some(other) if !other.is_null() => return other.to_string(),
            _ => {}
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty body".into();
    }
    trimmed.chars().take(MAX_DETAIL_CHARS).collect()
}
