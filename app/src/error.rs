//! App error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] valet_core::StoreError),

    #[error("Assistant error: {0}")]
    Assistant(#[from] valet_assistant::AssistantError),

    #[error("Tab view error: {0}")]
    TabView(#[from] valet_tabs::TabViewError),
}
