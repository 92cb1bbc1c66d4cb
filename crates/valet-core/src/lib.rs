//! Valet Core
//!
//! Domain state for the butler companion: guests with their stay
//! windows and scheduled room moves, service tasks, and the action
//! history. Everything is in-memory and seeded at startup; there is
//! no persistence layer by design.

mod error;
mod guest;
mod history;
pub mod seed;
mod store;
mod task;

pub use error::StoreError;
pub use guest::{Guest, GuestStatus, RoomCategory, RoomMove, Transportation};
pub use history::{ActionCategory, ActionEntry, ActionLog};
pub use store::{GuestStore, TaskStore};
pub use task::{Priority, Task, TaskCategory, TaskStatus};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
