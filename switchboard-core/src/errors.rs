use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("a tab for connection id '{0}' is already open")]
    DuplicateTab(String),

    #[error("failed to serialize connection profile: {0}")]
    Export(#[from] serde_json::Error),
}
