//! Valet app wiring
//!
//! Aggregates the seeded stores into one [`state::AppState`], builds
//! the tab lists each view hands to the swipeable tab component, and
//! adapts the drag-update callback for the header indicator.

mod error;
pub mod indicator;
pub mod state;
pub mod views;

pub use error::AppError;
pub use state::{AppState, Settings};

pub type Result<T> = std::result::Result<T, AppError>;
