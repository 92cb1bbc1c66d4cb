//! Gesture State Machine
//!
//! ```text
//! Resting
//!   ↓ pointer down
//! Dragging
//!   ↓ pointer up / cancel / external set
//! Settling
//!   ↓ settle finished (or interrupted by a new pointer down)
//! Resting
//! ```
//!
//! All transitions happen synchronously inside the event handlers on
//! [`crate::SwipeableTabView`]; there are no timers in this crate. The
//! settle phase exists so a renderer can play the slide+fade animation
//! and report back when it is done.

use serde::{Deserialize, Serialize};

/// Horizontal direction of the most recent nonzero drag offset.
///
/// `Left` means the content is moving left, i.e. the user is heading
/// toward the next (higher-index) tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tuning parameters for the gesture.
///
/// The defaults reproduce the behavior callers already rely on; both
/// knobs are exposed rather than baked in as constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum |normalized offset| at gesture end to change tabs
    pub commit_threshold: f32,
    /// Fraction of the raw offset applied when dragging past the
    /// first or last tab (rubber-band effect)
    pub boundary_resistance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 0.2,
            boundary_resistance: 0.3,
        }
    }
}

/// Transient per-gesture state, owned exclusively by the tab view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum GestureState {
    /// No pointer down, content at rest
    Resting,
    /// Pointer down and tracking
    Dragging {
        /// Horizontal coordinate captured at pointer down
        start_x: f32,
        /// Drag distance as a fraction of the viewport width, already
        /// resistance-dampened at the boundaries
        offset: f32,
        /// Sign of the last nonzero offset
        direction: Option<Direction>,
    },
    /// Gesture resolved, slide+fade transition in flight
    Settling { direction: Option<Direction> },
}

impl GestureState {
    pub(crate) fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }

    pub(crate) fn offset(&self) -> f32 {
        match self {
            GestureState::Dragging { offset, .. } => *offset,
            _ => 0.0,
        }
    }

    pub(crate) fn direction(&self) -> Option<Direction> {
        match self {
            GestureState::Dragging { direction, .. } => *direction,
            GestureState::Settling { direction } => *direction,
            GestureState::Resting => None,
        }
    }
}

/// Payload of the drag-update callback, mirrored by external
/// indicator widgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    /// Normalized offset, roughly in [-1, 1]
    pub offset: f32,
    /// Whether a pointer is still down
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GestureConfig::default();
        assert!((config.commit_threshold - 0.2).abs() < f32::EPSILON);
        assert!((config.boundary_resistance - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resting_has_no_offset() {
        assert_eq!(GestureState::Resting.offset(), 0.0);
        assert_eq!(GestureState::Resting.direction(), None);
        assert!(!GestureState::Resting.is_dragging());
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"left\"");
    }

    #[test]
    fn test_drag_update_serde() {
        let update = DragUpdate {
            offset: -0.25,
            active: true,
        };
        let json = serde_json::to_string(&update).unwrap();
        let back: DragUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, update);
    }
}
