//! Chat client for the Concierge support backend.
//!
//! Provides:
//! - The `ChatBackend` trait and a reqwest implementation for `POST /chat`
//! - Validated reply parsing (`ChatReply`)
//! - An explicit `Session` (user id + coordinates) attached to every request
//! - One-shot location acquisition published over a watch channel
//! - The `ChatView` presentation contract and an in-memory `Transcript`
//! - Markdown rendering of agent replies into styled spans
//! - `ChatAdapter`, which ties the above into a single submit operation

pub mod adapter;
pub mod http;
pub mod location;
pub mod markup;
pub mod session;
pub mod view;

use async_trait::async_trait;
use concierge_common::ConciergeError;
use serde::{Deserialize, Serialize};

pub use adapter::{ChatAdapter, SubmitOutcome};
pub use http::{HttpBackendConfig, HttpChatBackend};
pub use location::{
    spawn_location, FixedLocation, IpLocator, LocationError, LocationProvider, LocationStatus,
    LocationWatch, NoLocation,
};
pub use session::Session;
pub use view::{ChatView, Entry, Message, MessageBody, Transcript, FALLBACK_MESSAGE};

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one query and wait for the backend's reply.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub query: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    /// Identifier the backend wants the client to use from now on.
    pub user_id: Option<String>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Check a decoded JSON body for the reply shape.
    ///
    /// `response` must be a string. `user_id` may be absent or null; when
    /// present it must be a string, and an empty string counts as absent.
    pub fn from_value(json: serde_json::Value) -> Result<Self, ChatError> {
        let obj = json
            .as_object()
            .ok_or_else(|| ChatError::Malformed("reply is not a JSON object".into()))?;

        let response = match obj.get("response") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(ChatError::Malformed(format!(
                    "`response` must be a string, got {}",
                    json_type_name(other)
                )))
            }
            None => return Err(ChatError::Malformed("missing `response` field".into())),
        };

        let user_id = match obj.get("user_id") {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) if s.trim().is_empty() => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(ChatError::Malformed(format!(
                    "`user_id` must be a string, got {}",
                    json_type_name(other)
                )))
            }
        };

        Ok(Self { response, user_id })
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Every way a chat exchange can fail. The user sees the same fallback
/// message for all of them; the variant only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("malformed reply: {0}")]
    Malformed(String),
}

impl From<ChatError> for ConciergeError {
    fn from(err: ChatError) -> Self {
        ConciergeError::Chat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = ChatRequest {
            user_id: "GUEST".into(),
            query: "Where is my order?".into(),
            latitude: 19.1,
            longitude: 72.78,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "user_id": "GUEST",
                "query": "Where is my order?",
                "latitude": 19.1,
                "longitude": 72.78,
            })
        );
    }

    #[test]
    fn reply_with_response_only() {
        let reply = ChatReply::from_value(json!({ "response": "hello" })).unwrap();
        assert_eq!(reply, ChatReply::new("hello"));
    }

    #[test]
    fn reply_with_user_id() {
        let reply =
            ChatReply::from_value(json!({ "response": "hi", "user_id": "USR-42" })).unwrap();
        assert_eq!(reply.user_id.as_deref(), Some("USR-42"));
    }

    #[test]
    fn reply_null_or_blank_user_id_is_absent() {
        let reply = ChatReply::from_value(json!({ "response": "hi", "user_id": null })).unwrap();
        assert_eq!(reply.user_id, None);

        let reply = ChatReply::from_value(json!({ "response": "hi", "user_id": "  " })).unwrap();
        assert_eq!(reply.user_id, None);
    }

    #[test]
    fn reply_missing_response_is_malformed() {
        let err = ChatReply::from_value(json!({ "answer": "hi" })).unwrap_err();
        assert!(matches!(err, ChatError::Malformed(_)));
        assert!(err.to_string().contains("missing `response`"));
    }

    #[test]
    fn reply_wrong_types_are_malformed() {
        let err = ChatReply::from_value(json!({ "response": 42 })).unwrap_err();
        assert!(err.to_string().contains("got number"));

        let err = ChatReply::from_value(json!({ "response": "ok", "user_id": 7 })).unwrap_err();
        assert!(err.to_string().contains("`user_id` must be a string"));

        let err = ChatReply::from_value(json!(["response"])).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn chat_error_display() {
        assert_eq!(ChatError::Timeout.to_string(), "request timed out");
        let err = ChatError::Status {
            status: 500,
            detail: "database unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: database unavailable");
    }

    #[test]
    fn chat_error_into_concierge_error() {
        let err: ConciergeError = ChatError::Network("connection refused".into()).into();
        assert!(matches!(err, ConciergeError::Chat(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
