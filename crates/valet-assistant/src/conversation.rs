//! Conversation log and suggestion board

use chrono::{Duration, Utc};

use crate::error::AssistantError;
use crate::message::{Message, Role, Suggestion, SuggestionStatus};
use crate::responder::Responder;
use crate::Result;

const GREETING: &str = "Здравствуйте! Я ваш AI-помощник дворецкого. Чем могу помочь? \
    Я могу помочь с запросами гостей, приоритизацией задач, информацией об отеле и многим другим.";

/// Ordered chat history, seeded with the assistant's greeting.
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new(Role::Assistant, GREETING)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message. Blank input is rejected, matching the
    /// send button being a no-op on an empty field.
    pub fn push_user(&mut self, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        self.messages.push(Message::new(Role::User, content));
        Ok(())
    }

    pub fn push_assistant(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Send a user message and wait out the simulated typing delay
    /// for the assistant's reply. Returns the reply.
    pub async fn send(&mut self, responder: &Responder, content: &str) -> Result<Message> {
        self.push_user(content)?;
        tracing::debug!(chars = content.len(), "User message sent to assistant");

        let reply = responder.reply_after_delay().await;
        self.push_assistant(reply.clone());
        Ok(reply)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Proactive suggestions shown above the chat, newest first.
pub struct SuggestionBoard {
    suggestions: Vec<Suggestion>,
}

impl SuggestionBoard {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
        }
    }

    /// The suggestion set the demo app starts with.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut board = Self::new();

        let seeds = [
            (
                "Гости в номере 501 просили принести вазу для цветов.",
                "Добавить задачу в список?",
                15,
            ),
            (
                "Елена Сергеевна Иванова (номер 205) запросила вегетарианское меню на завтрак.",
                "Создать задачу для room service?",
                30,
            ),
            (
                "Завтра заезд Дмитрия Александровича Козлова (номер 410) с ранним заездом в 10:00.",
                "Подготовить номер заранее?",
                45,
            ),
            (
                "В номере 312 гость запросил дополнительные подушки (без перьев).",
                "Добавить задачу для housekeeping?",
                60,
            ),
        ];

        for (text, action, minutes_ago) in seeds {
            let mut suggestion = Suggestion::new(text, action);
            suggestion.timestamp = now - Duration::minutes(minutes_ago);
            board.suggestions.push(suggestion);
        }

        board
    }

    pub fn push(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }

    pub fn all(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn pending(&self) -> Vec<&Suggestion> {
        self.suggestions.iter().filter(|s| s.is_pending()).collect()
    }

    pub fn accept(&mut self, id: &str) -> Result<()> {
        self.set_status(id, SuggestionStatus::Accepted)
    }

    pub fn dismiss(&mut self, id: &str) -> Result<()> {
        self.set_status(id, SuggestionStatus::Dismissed)
    }

    fn set_status(&mut self, id: &str, status: SuggestionStatus) -> Result<()> {
        let suggestion = self
            .suggestions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AssistantError::SuggestionNotFound(id.to_string()))?;
        suggestion.status = status;
        Ok(())
    }
}

impl Default for SuggestionBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_starts_with_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::Assistant);
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut conversation = Conversation::new();
        assert!(conversation.push_user("   ").is_err());
        assert_eq!(conversation.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_user_then_assistant() {
        let mut conversation = Conversation::new();
        let responder = Responder::new().with_delay(StdDuration::from_millis(1500));

        let reply = conversation
            .send(&responder, "Когда заезд в 410?")
            .await
            .unwrap();

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.messages()[1].role, Role::User);
        assert_eq!(conversation.messages()[2].role, Role::Assistant);
    }

    #[test]
    fn test_suggestion_board_lifecycle() {
        let mut board = SuggestionBoard::seeded();
        assert_eq!(board.pending().len(), 4);

        let id = board.all()[0].id.clone();
        board.accept(&id).unwrap();
        assert_eq!(board.pending().len(), 3);

        let id = board.all()[1].id.clone();
        board.dismiss(&id).unwrap();
        assert_eq!(board.pending().len(), 2);

        assert!(board.accept("missing").is_err());
    }
}
