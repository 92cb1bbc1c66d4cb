//! Tab data structure
//!
//! A tab pairs a stable identifier with a display label, an optional
//! badge count, and an opaque content payload. The view never inspects
//! the payload; it only hands it back through the render plan, so the
//! gesture logic stays independent of whatever rendering technology
//! the caller uses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab<C> {
    /// Unique identifier, stable across renders
    pub id: String,
    /// Display text (owned by the caller)
    pub label: String,
    /// Optional count shown next to the label
    pub badge: Option<u32>,
    /// Opaque renderable payload
    pub content: C,
}

impl<C> Tab<C> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: C) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            badge: None,
            content,
        }
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = Tab::new("pending", "Pending", ());
        assert_eq!(tab.id, "pending");
        assert_eq!(tab.label, "Pending");
        assert!(tab.badge.is_none());
    }

    #[test]
    fn test_with_badge() {
        let tab = Tab::new("pending", "Pending", ()).with_badge(4);
        assert_eq!(tab.badge, Some(4));
    }
}
