//! Demo driver
//!
//! Seeds the in-memory state, wires the guests view into the
//! swipeable tab component and replays a few gestures, then sends one
//! chat message through the mock assistant. Everything of interest is
//! logged; set RUST_LOG=debug to also see the state transitions.

use anyhow::Result;

use valet_app::indicator::IndicatorHandle;
use valet_app::{views, AppState};
use valet_core::seed;
use valet_tabs::{RenderPlan, SwipeableTabView};

#[tokio::main]
async fn main() -> Result<()> {
    valet_core::init_logging();

    let state = AppState::seeded();
    tracing::info!(
        guests = state.guests().len(),
        tasks = state.tasks().len(),
        "Seeded demo state"
    );

    for guest in state.guests().all() {
        if let Some(room) = guest.move_tomorrow_room(seed::demo_today()) {
            tracing::info!(guest = %guest.last_name(), to_room = %room, "Moving tomorrow");
        }
    }

    let mut view = SwipeableTabView::new(views::guests::tabs(&state))?;
    view.set_viewport_width(400.0);
    view.on_tab_changed(|id| tracing::info!(tab = %id, "Tab changed"));

    let indicator = IndicatorHandle::new();
    indicator.attach(&mut view);

    // Swipe left past the commit threshold: in-house -> waiting
    view.pointer_down(300.0);
    view.pointer_move(180.0);
    tracing::info!(
        offset = view.drag_offset(),
        mounted = view.render_plan().mounted(),
        indicator = ?indicator.snapshot(),
        "Mid-drag"
    );
    view.pointer_up();
    view.finish_settle();

    // Swipe left again at the last tab: resisted, snaps back
    view.pointer_down(300.0);
    view.pointer_move(180.0);
    tracing::info!(offset = view.drag_offset(), "Resisted drag at the last tab");
    view.pointer_up();
    view.finish_settle();

    // External switch back, same settle contract as a drag
    view.set_active("in-house");
    if let RenderPlan::Settling { transition, .. } = view.render_plan() {
        tracing::info!(direction = ?transition.direction, "External switch settling");
    }
    view.finish_settle();

    let reply = state.send_chat("Какие задачи сейчас срочные?").await?;
    tracing::info!(reply = %reply.content, "Assistant replied");

    Ok(())
}
