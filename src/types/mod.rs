use serde::{Deserialize, Serialize};

// ============= API Request/Response Types =============

/// Body of `POST /mentor/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentorChatRequest {
    pub message: String,
}

impl MentorChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============= Chat Types =============

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// One exchanged chat line. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    role: MessageRole,
    content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// ============= Activity Types =============

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// CSS class fragment for the difficulty pill.
    pub fn slug(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityStatus {
    Completed,
    InProgress,
    Review,
    ToDo,
}

impl ActivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::InProgress => "In Progress",
            ActivityStatus::Review => "Review",
            ActivityStatus::ToDo => "To Do",
        }
    }

    /// Lowercased label with spaces replaced by dashes, e.g. `in-progress`.
    pub fn slug(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

/// A row in the recent-activity list. Read-only demo data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: u32,
    pub title: String,
    pub note: String,
    pub difficulty: Difficulty,
    pub status: ActivityStatus,
}

// ============= Plan Types =============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedProblem {
    pub id: u32,
    pub title: String,
    pub reason: String,
}

/// Problems the tutor suggested for a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyPlan {
    pub date: String,
    pub focus: String,
    pub problems: Vec<PlannedProblem>,
}

// ============= Error Types =============

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// Non-success HTTP status. `message` is the server body text, or the
    /// canonical status description when the body was empty or unreadable.
    #[error("Request failed {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ChatError {
    pub fn from_status(status: u16, body: Option<String>, status_text: &str) -> Self {
        let message = body
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| status_text.to_string());
        ChatError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_serializes_lowercase() {
        let msg = ChatMessage::user("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&MentorChatRequest::new("help")).unwrap();
        assert_eq!(body, r#"{"message":"help"}"#);
    }

    #[test]
    fn test_status_slug() {
        assert_eq!(ActivityStatus::InProgress.slug(), "in-progress");
        assert_eq!(ActivityStatus::ToDo.slug(), "to-do");
        assert_eq!(ActivityStatus::Review.slug(), "review");
        assert_eq!(Difficulty::Medium.slug(), "medium");
    }

    #[test]
    fn test_status_error_prefers_body() {
        let err = ChatError::from_status(500, Some("Ollama error: down".into()), "Internal Server Error");
        assert_eq!(err.to_string(), "Request failed 500: Ollama error: down");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_status_error_falls_back_to_status_text() {
        let empty = ChatError::from_status(404, Some(String::new()), "Not Found");
        assert_eq!(empty.to_string(), "Request failed 404: Not Found");

        let unreadable = ChatError::from_status(502, None, "Bad Gateway");
        assert_eq!(unreadable.to_string(), "Request failed 502: Bad Gateway");
    }
}
