use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PreferenceError {
    pub(crate) fn storage(err: &impl std::error::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
