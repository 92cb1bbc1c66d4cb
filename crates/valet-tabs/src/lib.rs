//! Valet swipeable tabs
//!
//! A rendering-agnostic swipeable tab view: one active pane, switched
//! either by explicit selection or by a horizontal drag gesture with
//! boundary resistance and a commit threshold. The crate owns the
//! gesture state machine and tells the caller what to mount and where;
//! it never touches a pane's content.

mod error;
mod gesture;
mod layout;
mod tab;
mod view;

pub use error::TabViewError;
pub use gesture::{Direction, DragUpdate, GestureConfig};
pub use layout::{IndicatorPosition, Pane, RenderPlan, SettleTransition};
pub use tab::Tab;
pub use view::SwipeableTabView;

pub type Result<T> = std::result::Result<T, TabViewError>;
