//! API client for communicating with the mentor service

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskflow::mentor::{chat_url, extract_reply, MentorClient};
use taskflow::types::{ChatError, MentorChatRequest, Result};
use taskflow::TutorChat;

/// Browser transport for `POST /mentor/chat` built on `fetch`.
#[derive(Debug, Clone)]
pub struct GlooMentorClient {
    url: String,
}

impl GlooMentorClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            url: chat_url(api_base),
        }
    }
}

#[async_trait(?Send)]
impl MentorClient for GlooMentorClient {
    async fn chat(&self, message: &str) -> Result<Option<String>> {
        let req = Request::post(&self.url)
            .json(&MentorChatRequest::new(message))
            .map_err(|e| ChatError::Network(format!("Failed to serialize request: {}", e)))?;

        let resp = req
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !resp.ok() {
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp.text().await.ok();
            return Err(ChatError::from_status(status, body, &status_text));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;

        Ok(extract_reply(&body))
    }
}

/// Submit the chat's current input and settle it in the background.
///
/// Does nothing when the session refuses the submit (blank input or a
/// request already in flight).
pub fn send_chat(api_base: String, chat: RwSignal<TutorChat>) {
    let mut pending = None;
    chat.update(|c| pending = c.submit());
    let Some(message) = pending else {
        return;
    };

    spawn_local(async move {
        let client = GlooMentorClient::new(&api_base);
        let outcome = client.chat(&message).await;
        chat.update(|c| {
            c.resolve(outcome);
        });
    });
}
