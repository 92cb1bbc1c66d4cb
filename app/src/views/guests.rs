//! Guests view
//!
//! Two swipeable tabs, in-house and waiting; departed guests live in
//! the separate archive pane.

use valet_core::{Guest, GuestStatus};
use valet_i18n::t;
use valet_tabs::Tab;

use crate::state::AppState;
use crate::views::PaneContent;

pub fn tabs(state: &AppState) -> Vec<Tab<PaneContent>> {
    let lang = state.language();
    let in_house = state.guests().by_status(GuestStatus::CheckedIn);
    let waiting = state.guests().by_status(GuestStatus::Waiting);

    vec![
        Tab::new("in-house", t(lang, "checkedIn"), PaneContent::Guests(in_house.clone()))
            .with_badge(in_house.len() as u32),
        Tab::new("waiting", t(lang, "waiting"), PaneContent::Guests(waiting.clone()))
            .with_badge(waiting.len() as u32),
    ]
}

/// Departed guests, newest stay first.
pub fn archive(state: &AppState) -> Vec<Guest> {
    state.guests().by_status(GuestStatus::Departed)
}
