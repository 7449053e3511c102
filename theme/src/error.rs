//! Crate-wide error type.

use crate::store::StoreError;

/// Error returned by the handlers and by config loading.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The page has no root element to carry theme tags.
    #[error("document has no root element")]
    MissingRoot,
    /// The trigger element the click handler attaches to is not in the page.
    #[error("trigger element `#{0}` not found")]
    MissingTrigger(String),
    #[error("failed to parse theme config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid theme config: {0}")]
    InvalidConfig(&'static str),
}
