//! Service task data structure

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the request came from a guest room or the hotel office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Main,
    Office,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Room number, or "Office" for internal work
    pub room: String,
    pub guest_name: String,
    /// What was asked for
    pub request: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub category: TaskCategory,
    /// Display time label, e.g. "10:30 AM"
    pub time: String,
    pub notes: Option<String>,
    pub adults: u8,
    pub children: u8,
    pub infants: u8,
}

impl Task {
    pub fn new(
        room: impl Into<String>,
        guest_name: impl Into<String>,
        request: impl Into<String>,
        priority: Priority,
        category: TaskCategory,
        time: impl Into<String>,
    ) -> Result<Self> {
        let request = request.into();
        if request.trim().is_empty() {
            return Err(StoreError::InvalidField {
                field: "request",
                reason: "cannot be empty".to_string(),
            });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            room: room.into(),
            guest_name: guest_name.into(),
            request,
            priority,
            status: TaskStatus::Pending,
            category,
            time: time.into(),
            notes: None,
            adults: 0,
            children: 0,
            infants: 0,
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_starts_pending() {
        let task = Task::new(
            "501",
            "Anna Sokolova",
            "Extra towels",
            Priority::Normal,
            TaskCategory::Main,
            "10:30 AM",
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.is_open());
    }

    #[test]
    fn test_empty_request_rejected() {
        let result = Task::new(
            "501",
            "Anna Sokolova",
            "",
            Priority::Normal,
            TaskCategory::Main,
            "10:30 AM",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_status_serde_kebab() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent < Priority::Low);
    }
}
