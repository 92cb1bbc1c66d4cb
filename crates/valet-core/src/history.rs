//! Action history
//!
//! Prepend-only log of what the butler did, shown on the profile view.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Task,
    Guest,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Short action label, e.g. "Task Completed"
    pub action: String,
    /// Human-readable detail line
    pub description: String,
    pub category: ActionCategory,
}

impl ActionEntry {
    pub fn new(
        action: impl Into<String>,
        description: impl Into<String>,
        category: ActionCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            action: action.into(),
            description: description.into(),
            category,
        }
    }

    pub(crate) fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Shared, newest-first action log.
pub struct ActionLog {
    entries: Arc<RwLock<Vec<ActionEntry>>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn seeded(entries: Vec<ActionEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn record(
        &self,
        action: impl Into<String>,
        description: impl Into<String>,
        category: ActionCategory,
    ) {
        let entry = ActionEntry::new(action, description, category);
        tracing::debug!(action = %entry.action, "Recorded action");
        self.entries.write().insert(0, entry);
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> Vec<ActionEntry> {
        self.entries.read().iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ActionLog {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
