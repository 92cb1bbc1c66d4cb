//! Chat messages and proactive suggestions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// HH:MM label the chat bubbles show.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Accepted,
    Dismissed,
}

/// A proactive prompt the assistant surfaces above the chat, e.g.
/// "guest asked for a vase - add a task?".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    /// What the assistant noticed
    pub text: String,
    /// The follow-up it proposes
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub status: SuggestionStatus,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            action: action.into(),
            timestamp: Utc::now(),
            status: SuggestionStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message() {
        let message = Message::new(Role::User, "Когда заезд в 410?");
        assert_eq!(message.role, Role::User);
        assert_eq!(message.time_label().len(), 5);
    }

    #[test]
    fn test_new_suggestion_is_pending() {
        let suggestion = Suggestion::new("Guests in 501 asked for a vase.", "Add a task?");
        assert!(suggestion.is_pending());
    }
}
