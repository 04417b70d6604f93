//! Mentor chat client abstraction
//!
//! The mentor service is an opaque remote endpoint: one `POST {base}/mentor/chat`
//! per user message, body `{"message": "..."}`, JSON reply carrying either a
//! `reply` or a `message` field. Transports:
//! - **reqwest** ([`HttpMentorClient`], feature `http`) for native callers
//! - **gloo-net** in the browser frontend under `ui/`

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpMentorClient;

use crate::types::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Sub-path of the chat endpoint, appended to the configured base address.
pub const CHAT_PATH: &str = "/mentor/chat";

/// Reply field names in lookup priority order.
pub const REPLY_FIELDS: [&str; 2] = ["reply", "message"];

/// Client for the remote mentor service
///
/// One call issues exactly one request: no retries, no timeout, no
/// cancellation. Futures are not required to be `Send` so browser
/// transports can implement this trait too.
#[async_trait(?Send)]
pub trait MentorClient {
    /// Send one user message.
    ///
    /// `Ok(None)` means the service answered successfully but the body carried
    /// none of [`REPLY_FIELDS`].
    async fn chat(&self, message: &str) -> Result<Option<String>>;
}

/// Full URL of the chat endpoint for `base`. A trailing slash on the base is ignored.
pub fn chat_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), CHAT_PATH)
}

/// First field of [`REPLY_FIELDS`] that is present and not `null`.
///
/// Strings come back verbatim, empty ones included. Any other JSON value is
/// rendered as its JSON text.
pub fn extract_reply(body: &Value) -> Option<String> {
    REPLY_FIELDS
        .iter()
        .filter_map(|field| body.get(field))
        .find(|value| !value.is_null())
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
}
