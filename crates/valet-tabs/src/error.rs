//! Tab view error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabViewError {
    #[error("Duplicate tab id: {0}")]
    DuplicateTabId(String),
}
