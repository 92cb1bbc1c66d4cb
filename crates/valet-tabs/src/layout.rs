//! Render plan
//!
//! The view does not render anything itself. Each frame the caller
//! asks for a [`RenderPlan`] describing which panes to mount and where
//! to place them, plus an [`IndicatorPosition`] for the header bar.
//! Translations are percentages of the container width and opacities
//! are in [0, 1], so any animation system can realize them.

use crate::gesture::{Direction, GestureState};
use crate::tab::Tab;
use crate::view::SwipeableTabView;

/// One mounted content pane.
#[derive(Debug)]
pub struct Pane<'a, C> {
    pub index: usize,
    pub tab: &'a Tab<C>,
    /// Horizontal translation, percent of container width
    pub translate_pct: f32,
    pub opacity: f32,
}

/// Post-gesture slide+fade. Carries only the direction; easing and
/// duration are up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTransition {
    /// `None` for a snap-back with no movement to animate from
    pub direction: Option<Direction>,
}

#[derive(Debug)]
pub enum RenderPlan<'a, C> {
    /// No tabs configured; render a placeholder
    Empty,
    /// Exactly the active pane, at rest
    Resting { pane: Pane<'a, C> },
    /// The active pane following the finger, plus at most one
    /// neighbor sliding in from the drag direction
    Dragging {
        current: Pane<'a, C>,
        incoming: Option<Pane<'a, C>>,
    },
    /// The destination pane with its transition still playing
    Settling {
        pane: Pane<'a, C>,
        transition: SettleTransition,
    },
}

impl<'a, C> RenderPlan<'a, C> {
    /// Number of content panes this plan mounts.
    pub fn mounted(&self) -> usize {
        match self {
            RenderPlan::Empty => 0,
            RenderPlan::Resting { .. } | RenderPlan::Settling { .. } => 1,
            RenderPlan::Dragging { incoming, .. } => 1 + usize::from(incoming.is_some()),
        }
    }
}

/// Geometry of the header indicator bar, percent of header width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPosition {
    pub left_pct: f32,
    pub width_pct: f32,
}

impl<C> SwipeableTabView<C> {
    pub fn render_plan(&self) -> RenderPlan<'_, C> {
        let Some(active_tab) = self.tabs.get(self.active) else {
            return RenderPlan::Empty;
        };

        match self.gesture {
            GestureState::Resting => RenderPlan::Resting {
                pane: self.resting_pane(active_tab),
            },
            GestureState::Settling { direction } => RenderPlan::Settling {
                pane: self.resting_pane(active_tab),
                transition: SettleTransition { direction },
            },
            GestureState::Dragging { offset, .. } => {
                let current = Pane {
                    index: self.active,
                    tab: active_tab,
                    translate_pct: offset * 100.0,
                    opacity: 1.0 - offset.abs() * 0.5,
                };

                // Negative offset reveals the next tab from the right
                // edge, positive the previous one from the left.
                let incoming = if offset < 0.0 && self.active + 1 < self.tabs.len() {
                    Some(Pane {
                        index: self.active + 1,
                        tab: &self.tabs[self.active + 1],
                        translate_pct: 100.0 + offset * 100.0,
                        opacity: offset.abs(),
                    })
                } else if offset > 0.0 && self.active > 0 {
                    Some(Pane {
                        index: self.active - 1,
                        tab: &self.tabs[self.active - 1],
                        translate_pct: -100.0 + offset * 100.0,
                        opacity: offset.abs(),
                    })
                } else {
                    None
                };

                RenderPlan::Dragging { current, incoming }
            }
        }
    }

    /// Indicator geometry: an even split of the header per tab, with
    /// the bar following the finger during a drag.
    pub fn indicator(&self) -> IndicatorPosition {
        if self.tabs.is_empty() {
            return IndicatorPosition {
                left_pct: 0.0,
                width_pct: 0.0,
            };
        }

        let count = self.tabs.len() as f32;
        let base = (self.active as f32 / count) * 100.0;
        let offset = self.gesture.offset();

        let left_pct = if self.gesture.is_dragging() && offset != 0.0 {
            base + offset * 100.0
        } else {
            base
        };

        IndicatorPosition {
            left_pct,
            width_pct: 100.0 / count,
        }
    }

    fn resting_pane<'a>(&'a self, tab: &'a Tab<C>) -> Pane<'a, C> {
        Pane {
            index: self.active,
            tab,
            translate_pct: 0.0,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> SwipeableTabView<&'static str> {
        let mut view = SwipeableTabView::new(vec![
            Tab::new("a", "A", "pane a"),
            Tab::new("b", "B", "pane b"),
            Tab::new("c", "C", "pane c"),
        ])
        .unwrap();
        view.set_viewport_width(400.0);
        view
    }

    #[test]
    fn test_empty_plan() {
        let view: SwipeableTabView<()> = SwipeableTabView::new(Vec::new()).unwrap();
        assert!(matches!(view.render_plan(), RenderPlan::Empty));
        assert_eq!(view.render_plan().mounted(), 0);
    }

    #[test]
    fn test_rest_mounts_exactly_one_pane() {
        let view = three_tabs();
        let plan = view.render_plan();
        assert_eq!(plan.mounted(), 1);

        match plan {
            RenderPlan::Resting { pane } => {
                assert_eq!(pane.index, 0);
                assert_eq!(pane.translate_pct, 0.0);
                assert_eq!(pane.opacity, 1.0);
            }
            _ => panic!("expected resting plan"),
        }
    }

    #[test]
    fn test_drag_left_mounts_current_and_next() {
        let mut view = three_tabs();
        view.pointer_down(300.0);
        view.pointer_move(180.0); // offset -0.3

        let plan = view.render_plan();
        assert_eq!(plan.mounted(), 2);

        match plan {
            RenderPlan::Dragging { current, incoming } => {
                assert_eq!(current.index, 0);
                assert!((current.translate_pct - (-30.0)).abs() < 1e-4);
                assert!((current.opacity - 0.85).abs() < 1e-4);

                let incoming = incoming.unwrap();
                assert_eq!(incoming.index, 1);
                assert!((incoming.translate_pct - 70.0).abs() < 1e-4);
                assert!((incoming.opacity - 0.3).abs() < 1e-4);
            }
            _ => panic!("expected dragging plan"),
        }
    }

    #[test]
    fn test_drag_right_mounts_current_and_previous() {
        let mut view = three_tabs();
        view.set_active("b");
        view.finish_settle();

        view.pointer_down(100.0);
        view.pointer_move(180.0); // offset +0.2

        match view.render_plan() {
            RenderPlan::Dragging { current, incoming } => {
                assert_eq!(current.index, 1);
                let incoming = incoming.unwrap();
                assert_eq!(incoming.index, 0);
                assert!((incoming.translate_pct - (-80.0)).abs() < 1e-4);
                assert!((incoming.opacity - 0.2).abs() < 1e-4);
            }
            _ => panic!("expected dragging plan"),
        }
    }

    #[test]
    fn test_resisted_edge_drag_mounts_only_current() {
        // At the first tab a rightward drag has no neighbor to reveal
        let mut view = three_tabs();
        view.pointer_down(100.0);
        view.pointer_move(220.0);

        let plan = view.render_plan();
        assert_eq!(plan.mounted(), 1);
        match plan {
            RenderPlan::Dragging { incoming, .. } => assert!(incoming.is_none()),
            _ => panic!("expected dragging plan"),
        }
    }

    #[test]
    fn test_settle_carries_direction() {
        let mut view = three_tabs();
        view.pointer_down(300.0);
        view.pointer_move(180.0);
        view.pointer_up();

        match view.render_plan() {
            RenderPlan::Settling { pane, transition } => {
                assert_eq!(pane.index, 1);
                assert_eq!(pane.translate_pct, 0.0);
                assert_eq!(transition.direction, Some(Direction::Left));
            }
            _ => panic!("expected settling plan"),
        }

        view.finish_settle();
        assert!(matches!(view.render_plan(), RenderPlan::Resting { .. }));
    }

    #[test]
    fn test_snap_back_settles_without_direction() {
        let mut view = three_tabs();
        view.pointer_down(300.0);
        view.pointer_move(290.0);
        view.pointer_up();

        match view.render_plan() {
            RenderPlan::Settling { pane, transition } => {
                assert_eq!(pane.index, 0);
                assert_eq!(transition.direction, None);
            }
            _ => panic!("expected settling plan"),
        }
    }

    #[test]
    fn test_indicator_at_rest() {
        let mut view = three_tabs();
        view.set_active("b");
        view.finish_settle();

        let indicator = view.indicator();
        assert!((indicator.left_pct - 100.0 / 3.0).abs() < 1e-4);
        assert!((indicator.width_pct - 100.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_indicator_follows_drag() {
        let mut view = three_tabs();
        view.set_active("b");
        view.finish_settle();

        view.pointer_down(300.0);
        view.pointer_move(180.0); // offset -0.3

        let indicator = view.indicator();
        assert!((indicator.left_pct - (100.0 / 3.0 - 30.0)).abs() < 1e-4);
    }

    #[test]
    fn test_indicator_for_empty_view() {
        let view: SwipeableTabView<()> = SwipeableTabView::new(Vec::new()).unwrap();
        let indicator = view.indicator();
        assert_eq!(indicator.width_pct, 0.0);
    }
}
