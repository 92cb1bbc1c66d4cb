//! Swipeable tab view
//!
//! Owns the active tab index and a transient gesture, resolves each
//! gesture into either a tab change or a snap-back, and reports live
//! drag progress to external listeners (tab-header indicators render
//! outside this component and follow the drag through the callback).
//!
//! All input is synchronous: pointer events and external tab sets are
//! handled inline, so a new pointer down or an external set implicitly
//! cancels whatever gesture was in flight.

use crate::error::TabViewError;
use crate::gesture::{Direction, GestureConfig, GestureState};
use crate::tab::Tab;
use crate::Result;

type TabChangedFn = Box<dyn FnMut(&str) + Send>;
type DragUpdateFn = Box<dyn FnMut(f32, bool) + Send>;

pub struct SwipeableTabView<C> {
    pub(crate) tabs: Vec<Tab<C>>,
    pub(crate) active: usize,
    pub(crate) gesture: GestureState,
    config: GestureConfig,
    /// Measured width of the content container; zero until measured
    viewport_width: f32,
    on_tab_changed: Option<TabChangedFn>,
    on_drag_update: Option<DragUpdateFn>,
}

impl<C> SwipeableTabView<C> {
    /// Create a view over an ordered tab list, first tab active.
    ///
    /// An empty list is a degenerate but valid configuration: the view
    /// renders a placeholder and ignores all gesture input. Duplicate
    /// ids are rejected because every contract here is id-keyed.
    pub fn new(tabs: Vec<Tab<C>>) -> Result<Self> {
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].iter().any(|t| t.id == tab.id) {
                return Err(TabViewError::DuplicateTabId(tab.id.clone()));
            }
        }

        Ok(Self {
            tabs,
            active: 0,
            gesture: GestureState::Resting,
            config: GestureConfig::default(),
            viewport_width: 0.0,
            on_tab_changed: None,
            on_drag_update: None,
        })
    }

    /// Like [`new`](Self::new), starting on the tab with the given id.
    /// An unknown id falls back to the first tab.
    pub fn with_initial(tabs: Vec<Tab<C>>, initial_active_id: &str) -> Result<Self> {
        let mut view = Self::new(tabs)?;
        view.active = view
            .tabs
            .iter()
            .position(|t| t.id == initial_active_id)
            .unwrap_or(0);
        Ok(view)
    }

    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    /// Update the measured container width. While it is zero (not yet
    /// measured) drag offsets are treated as zero rather than dividing
    /// by it.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn on_tab_changed(&mut self, callback: impl FnMut(&str) + Send + 'static) {
        self.on_tab_changed = Some(Box::new(callback));
    }

    pub fn on_drag_update(&mut self, callback: impl FnMut(f32, bool) + Send + 'static) {
        self.on_drag_update = Some(Box::new(callback));
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab<C>> {
        self.tabs.get(self.active)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_tab().map(|t| t.id.as_str())
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Current normalized drag offset; zero outside a drag.
    pub fn drag_offset(&self) -> f32 {
        self.gesture.offset()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.gesture.direction()
    }

    /// Pointer/touch down: begin tracking a gesture.
    ///
    /// Overrides an in-flight gesture or an unfinished settle; no
    /// explicit cancellation is needed.
    pub fn pointer_down(&mut self, x: f32) {
        if self.tabs.is_empty() {
            return;
        }

        self.gesture = GestureState::Dragging {
            start_x: x,
            offset: 0.0,
            direction: None,
        };
    }

    /// Pointer/touch move: update the normalized offset and direction,
    /// then notify the drag listener.
    pub fn pointer_move(&mut self, x: f32) {
        let (start_x, prior_direction) = match self.gesture {
            GestureState::Dragging {
                start_x, direction, ..
            } => (start_x, direction),
            _ => return,
        };

        let offset = if self.viewport_width > 0.0 {
            let raw = (x - start_x) / self.viewport_width;
            self.dampen_at_boundary(raw)
        } else {
            0.0
        };

        // Last nonzero sign wins; an exact zero mid-gesture keeps the
        // previous direction.
        let direction = if offset < 0.0 {
            Some(Direction::Left)
        } else if offset > 0.0 {
            Some(Direction::Right)
        } else {
            prior_direction
        };

        self.gesture = GestureState::Dragging {
            start_x,
            offset,
            direction,
        };

        self.emit_drag_update(offset, true);
    }

    /// Pointer/touch up: resolve the gesture.
    ///
    /// Past the commit threshold with a neighbor in that direction the
    /// active tab changes; otherwise the content snaps back. Either
    /// way the gesture resets and the drag listener receives a final
    /// `(0.0, false)`.
    pub fn pointer_up(&mut self) {
        let offset = match self.gesture {
            GestureState::Dragging { offset, .. } => offset,
            _ => return,
        };

        let threshold = self.config.commit_threshold;

        if offset <= -threshold && self.active + 1 < self.tabs.len() {
            self.change_to(self.active + 1, Direction::Left, "drag");
        } else if offset >= threshold && self.active > 0 {
            self.change_to(self.active - 1, Direction::Right, "drag");
        } else {
            self.gesture = GestureState::Settling { direction: None };
        }

        self.emit_drag_update(0.0, false);
    }

    /// Pointer cancel resolves exactly like pointer up.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Caller-driven tab change (external header buttons).
    ///
    /// Idempotent for the active id, a silent no-op for unknown ids.
    /// Any other id cancels an in-progress gesture and switches, with
    /// the settle direction derived from the index ordering.
    pub fn set_active(&mut self, id: &str) {
        let index = match self.tabs.iter().position(|t| t.id == id) {
            Some(index) => index,
            None => {
                tracing::debug!(tab_id = %id, "Ignoring set_active for unknown tab");
                return;
            }
        };

        if index == self.active {
            return;
        }

        if self.gesture.is_dragging() {
            self.emit_drag_update(0.0, false);
        }

        let direction = if index > self.active {
            Direction::Left
        } else {
            Direction::Right
        };
        self.change_to(index, direction, "external");
    }

    /// Renderer callback once the settle animation has played out.
    pub fn finish_settle(&mut self) {
        if let GestureState::Settling { .. } = self.gesture {
            self.gesture = GestureState::Resting;
        }
    }

    pub(crate) fn is_first_active(&self) -> bool {
        self.active == 0
    }

    pub(crate) fn is_last_active(&self) -> bool {
        !self.tabs.is_empty() && self.active == self.tabs.len() - 1
    }

    /// Rubber-band the offset when dragging past the first or last tab.
    fn dampen_at_boundary(&self, raw: f32) -> f32 {
        if (self.is_first_active() && raw > 0.0) || (self.is_last_active() && raw < 0.0) {
            raw * self.config.boundary_resistance
        } else {
            raw
        }
    }

    /// Commit a tab change: update the index, enter the settle phase,
    /// and notify the change listener exactly once.
    fn change_to(&mut self, index: usize, direction: Direction, via: &str) {
        let from = self.tabs[self.active].id.clone();
        let to = self.tabs[index].id.clone();

        self.active = index;
        self.gesture = GestureState::Settling {
            direction: Some(direction),
        };

        tracing::debug!(from = %from, to = %to, via = via, "Tab change");

        if let Some(callback) = self.on_tab_changed.as_mut() {
            callback(&to);
        }
    }

    fn emit_drag_update(&mut self, offset: f32, active: bool) {
        if let Some(callback) = self.on_drag_update.as_mut() {
            callback(offset, active);
        }
    }
}
