//! ChatBackend trait implementation for HttpChatBackend.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::{ChatBackend, ChatError, ChatReply, ChatRequest};

use super::client::{error_detail, transport_error, HttpChatBackend};

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        debug!(url = %self.config.url, user_id = %request.user_id, "chat request");

        let response = self
            .http
            .post(&self.config.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "chat reply");
        Self::parse_reply(&body)
    }
}
