//! View-model builders
//!
//! Each top-level view assembles the tab list it feeds into the
//! swipeable tab component. The tab view treats [`PaneContent`] as an
//! opaque payload; only the renderer pattern-matches it.

pub mod assistant;
pub mod guests;
pub mod profile;
pub mod tasks;

use valet_assistant::{Message, Suggestion};
use valet_core::{ActionEntry, Guest, Task};

use crate::state::Settings;

/// Opaque pane payload carried by every tab in the app.
pub enum PaneContent {
    Guests(Vec<Guest>),
    Tasks(Vec<Task>),
    Chat {
        messages: Vec<Message>,
        suggestions: Vec<Suggestion>,
    },
    Profile(ProfileSummary),
}

pub struct ProfileSummary {
    pub tasks_done: usize,
    pub active_guests: usize,
    pub settings: Settings,
    pub recent_activity: Vec<ActionEntry>,
}
