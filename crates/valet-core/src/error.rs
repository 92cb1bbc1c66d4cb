//! Domain error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Guest not found: {0}")]
    GuestNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}
