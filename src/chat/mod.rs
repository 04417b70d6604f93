//! Tutor chat session and its interaction loop
//!
//! [`TutorChat`] is a two-state machine gated on an in-flight flag:
//!
//! ```text
//!   Idle ──submit()──▶ Sending ──resolve(Ok | Err)──▶ Idle
//! ```
//!
//! `submit` and `resolve` are split so a reactive UI can hold the state in a
//! signal without keeping a borrow across the network await.

use crate::types::{ChatError, ChatMessage, Result};
use tracing::{debug, warn};

/// First assistant line of a fresh tutor session.
pub const GREETING: &str =
    "Hey! Tell me what you\u{2019}re studying today (topic + concepts you struggled with).";

/// Assistant content when a successful response carried no reply field.
pub const NO_REPLY_FALLBACK: &str = "(No reply field found)";

/// Text of the ephemeral in-flight bubble.
pub const THINKING: &str = "Thinking\u{2026}";

/// Assistant message shown when the mentor call fails.
pub fn demo_mode_message(err: &ChatError) -> String {
    format!(
        "Demo mode: backend not connected. (Error: {err})\n\n\
         Try: \u{201c}Explain sliding window for longest substring.\u{201d}"
    )
}

/// Ordered, append-only message log for one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A rendered row in the chat window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEntry<'a> {
    Message(&'a ChatMessage),
    /// Placeholder while a request is in flight. Never stored in the session.
    Thinking,
}

/// Chat state owned by the tutor view: message log, input buffer, in-flight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorChat {
    session: ChatSession,
    input: String,
    in_flight: bool,
}

impl TutorChat {
    /// Session seeded with the [`GREETING`].
    pub fn new() -> Self {
        let mut session = ChatSession::new();
        session.push(ChatMessage::assistant(GREETING));
        Self::with_session(session)
    }

    pub fn with_session(session: ChatSession) -> Self {
        Self {
            session,
            input: String::new(),
            in_flight: false,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.session.messages()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn can_send(&self) -> bool {
        !self.in_flight && !self.input.trim().is_empty()
    }

    /// Accept the current input for sending.
    ///
    /// Appends the user message, clears the input and marks the session in
    /// flight, then returns the trimmed text to hand to the mentor client.
    /// Returns `None` without touching anything when the trimmed input is
    /// empty or a request is already in flight.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_send() {
            debug!(in_flight = self.in_flight, "Submit ignored");
            return None;
        }

        let text = self.input.trim().to_string();
        self.session.push(ChatMessage::user(text.clone()));
        self.input.clear();
        self.in_flight = true;
        Some(text)
    }

    /// Settle the in-flight request with the mentor client's outcome.
    ///
    /// Appends exactly one assistant message and returns to idle. Returns
    /// `false` if no request was in flight, in which case nothing changes.
    pub fn resolve(&mut self, outcome: Result<Option<String>>) -> bool {
        if !self.in_flight {
            warn!("Mentor outcome arrived with no request in flight; dropping it");
            return false;
        }

        let content = match outcome {
            Ok(Some(reply)) => reply,
            Ok(None) => NO_REPLY_FALLBACK.to_string(),
            Err(err) => {
                warn!(error = %err, "Mentor chat failed; showing demo-mode reply");
                demo_mode_message(&err)
            }
        };
        self.session.push(ChatMessage::assistant(content));
        self.in_flight = false;
        true
    }

    /// Rows to render: every stored message, then a [`ChatEntry::Thinking`]
    /// placeholder while in flight.
    pub fn entries(&self) -> Vec<ChatEntry<'_>> {
        self.session
            .iter()
            .map(ChatEntry::Message)
            .chain(self.in_flight.then_some(ChatEntry::Thinking))
            .collect()
    }
}

impl Default for TutorChat {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn test_new_session_has_greeting() {
        let chat = TutorChat::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role(), MessageRole::Assistant);
        assert_eq!(chat.messages()[0].content(), GREETING);
        assert!(!chat.is_in_flight());
    }

    #[test]
    fn test_submit_appends_trimmed_user_message() {
        let mut chat = TutorChat::new();
        chat.set_input("  explain BFS  ");

        let sent = chat.submit();

        assert_eq!(sent.as_deref(), Some("explain BFS"));
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[1], ChatMessage::user("explain BFS"));
        assert_eq!(chat.input(), "");
        assert!(chat.is_in_flight());
    }

    #[test]
    fn test_submit_whitespace_is_noop() {
        let mut chat = TutorChat::new();
        chat.set_input(" \n\t ");
        let before = chat.clone();

        assert_eq!(chat.submit(), None);
        assert_eq!(chat, before);
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut chat = TutorChat::new();
        chat.set_input("first");
        chat.submit();
        chat.set_input("second");
        let before = chat.clone();

        assert!(!chat.can_send());
        assert_eq!(chat.submit(), None);
        assert_eq!(chat, before);
        assert_eq!(chat.input(), "second");
    }

    #[test]
    fn test_resolve_success() {
        let mut chat = TutorChat::new();
        chat.set_input("hint please");
        chat.submit();

        assert!(chat.resolve(Ok(Some("Store the index first.".into()))));
        assert_eq!(chat.messages().last(), Some(&ChatMessage::assistant("Store the index first.")));
        assert!(!chat.is_in_flight());
    }

    #[test]
    fn test_resolve_without_reply_field() {
        let mut chat = TutorChat::new();
        chat.set_input("hint please");
        chat.submit();
        chat.resolve(Ok(None));

        assert_eq!(chat.messages().last().unwrap().content(), NO_REPLY_FALLBACK);
    }

    #[test]
    fn test_resolve_failure_shows_demo_mode() {
        let mut chat = TutorChat::new();
        chat.set_input("hint please");
        chat.submit();
        let err = ChatError::Network("connection refused".into());
        chat.resolve(Err(err));

        let last = chat.messages().last().unwrap();
        assert_eq!(last.role(), MessageRole::Assistant);
        assert!(last.content().starts_with("Demo mode: backend not connected."));
        assert!(last.content().contains("connection refused"));
        assert!(!chat.is_in_flight());
        assert!(chat.messages().len() == 3);
    }

    #[test]
    fn test_resolve_when_idle_is_ignored() {
        let mut chat = TutorChat::new();
        assert!(!chat.resolve(Ok(Some("stray".into()))));
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_thinking_entry_only_while_in_flight() {
        let mut chat = TutorChat::new();
        assert_eq!(chat.entries().len(), 1);

        chat.set_input("q");
        chat.submit();
        let entries = chat.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.last(), Some(&ChatEntry::Thinking));
        assert_eq!(chat.messages().len(), 2);

        chat.resolve(Ok(Some("a".into())));
        assert!(chat.entries().iter().all(|e| matches!(e, ChatEntry::Message(_))));
        assert_eq!(chat.entries().len(), 3);
    }

    #[test]
    fn test_session_preserves_order() {
        let mut chat = TutorChat::with_session(ChatSession::new());
        for (question, answer) in [("one", "1"), ("two", "2")] {
            chat.set_input(question);
            chat.submit();
            chat.resolve(Ok(Some(answer.into())));
        }

        let contents: Vec<&str> = chat.messages().iter().map(|m| m.content()).collect();
        assert_eq!(contents, ["one", "1", "two", "2"]);
    }
}
