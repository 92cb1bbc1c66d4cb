//! Assistant error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Suggestion not found: {0}")]
    SuggestionNotFound(String),
}
