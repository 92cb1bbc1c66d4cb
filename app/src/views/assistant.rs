//! Assistant view
//!
//! Single chat pane: the conversation so far plus the pending
//! proactive suggestions rendered above the input.

use valet_i18n::t;
use valet_tabs::Tab;

use crate::state::AppState;
use crate::views::PaneContent;

pub fn pane(state: &AppState) -> Tab<PaneContent> {
    let lang = state.language();
    Tab::new(
        "assistant",
        t(lang, "aiAssistant"),
        PaneContent::Chat {
            messages: state.conversation_messages(),
            suggestions: state.pending_suggestions(),
        },
    )
}
