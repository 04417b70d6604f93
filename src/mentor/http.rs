//! reqwest transport for the mentor chat endpoint

use super::{chat_url, extract_reply, MentorClient};
use crate::types::{ChatError, MentorChatRequest, Result};
use crate::utils::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct HttpMentorClient {
    client: Client,
    url: String,
}

impl HttpMentorClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            client: Client::new(),
            url: chat_url(api_base),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl MentorClient for HttpMentorClient {
    #[instrument(skip(self, message), fields(url = %self.url, len = message.len()))]
    async fn chat(&self, message: &str) -> Result<Option<String>> {
        let response = self
            .client
            .post(&self.url)
            .json(&MentorChatRequest::new(message))
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            let err = ChatError::from_status(
                status.as_u16(),
                body,
                status.canonical_reason().unwrap_or_default(),
            );
            warn!(error = %err, "Mentor chat request failed");
            return Err(err);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;

        let reply = extract_reply(&body);
        debug!(has_reply = reply.is_some(), "Mentor chat response received");
        Ok(reply)
    }
}
