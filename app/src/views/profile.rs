//! Profile view
//!
//! Butler stats, settings toggles and the recent activity feed.

use valet_i18n::t;
use valet_tabs::Tab;

use crate::state::AppState;
use crate::views::{PaneContent, ProfileSummary};

const RECENT_ACTIVITY_LIMIT: usize = 20;

pub fn pane(state: &AppState) -> Tab<PaneContent> {
    let lang = state.language();
    Tab::new(
        "profile",
        t(lang, "profile"),
        PaneContent::Profile(ProfileSummary {
            tasks_done: state.tasks_done(),
            active_guests: state.active_guests(),
            settings: state.settings(),
            recent_activity: state.history().recent(RECENT_ACTIVITY_LIMIT),
        }),
    )
}
