//! Mock implementations for testing.
//!
//! Provides a scripted mentor client so the chat loop can be exercised
//! without a server.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use taskflow::mentor::MentorClient;
use taskflow::types::{ChatError, Result};

/// Mock mentor client that replays queued outcomes and records every message
/// it was asked to send.
///
/// # Examples
///
/// ```
/// let client = MockMentorClient::new()
///     .then_reply("Use a hashmap.")
///     .then_fail(ChatError::Network("connection refused".into()));
/// ```
#[derive(Default)]
pub struct MockMentorClient {
    outcomes: RefCell<VecDeque<Result<Option<String>>>>,
    sent: RefCell<Vec<String>>,
}

impl MockMentorClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_reply(self, reply: &str) -> Self {
        self.outcomes.borrow_mut().push_back(Ok(Some(reply.to_string())));
        self
    }

    pub fn then_no_reply(self) -> Self {
        self.outcomes.borrow_mut().push_back(Ok(None));
        self
    }

    pub fn then_fail(self, err: ChatError) -> Self {
        self.outcomes.borrow_mut().push_back(Err(err));
        self
    }

    /// Messages received so far, in call order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl MentorClient for MockMentorClient {
    async fn chat(&self, message: &str) -> Result<Option<String>> {
        self.sent.borrow_mut().push(message.to_string());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Network("no scripted outcome".into())))
    }
}
