//! Valet Assistant
//!
//! Mock AI chat panel: a conversation log seeded with a greeting, a
//! canned-reply responder behind a simulated typing delay, and a
//! board of proactive suggestions the butler can accept or dismiss.
//! No model, no network; the point is the interaction contract.

mod conversation;
mod error;
mod message;
mod responder;

pub use conversation::{Conversation, SuggestionBoard};
pub use error::AssistantError;
pub use message::{Message, Role, Suggestion, SuggestionStatus};
pub use responder::Responder;

pub type Result<T> = std::result::Result<T, AssistantError>;
