//! Tab-header indicator adapter
//!
//! The indicator bar renders outside the tab view and follows the
//! drag through the `on_drag_update` callback. This handle is the
//! contract's consumer side: it mirrors every update, and the final
//! `(0.0, false)` at gesture end puts it back at rest.

use parking_lot::RwLock;
use std::sync::Arc;

use valet_tabs::SwipeableTabView;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorBar {
    /// Normalized drag offset being mirrored
    pub offset: f32,
    /// Whether a drag is in progress
    pub active: bool,
}

#[derive(Clone, Default)]
pub struct IndicatorHandle {
    bar: Arc<RwLock<IndicatorBar>>,
}

impl IndicatorHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe this handle to a tab view's drag updates.
    pub fn attach<C>(&self, view: &mut SwipeableTabView<C>) {
        let handle = self.clone();
        view.on_drag_update(move |offset, active| {
            let mut bar = handle.bar.write();
            bar.offset = offset;
            bar.active = active;
        });
    }

    pub fn snapshot(&self) -> IndicatorBar {
        *self.bar.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valet_tabs::Tab;

    #[test]
    fn test_indicator_follows_drag_and_rests() {
        let mut view = SwipeableTabView::new(vec![
            Tab::new("a", "A", ()),
            Tab::new("b", "B", ()),
        ])
        .unwrap();
        view.set_viewport_width(400.0);

        let handle = IndicatorHandle::new();
        handle.attach(&mut view);

        view.pointer_down(300.0);
        view.pointer_move(200.0);
        let bar = handle.snapshot();
        assert!(bar.active);
        assert!((bar.offset - (-0.25)).abs() < 1e-6);

        view.pointer_up();
        assert_eq!(handle.snapshot(), IndicatorBar::default());
    }
}
