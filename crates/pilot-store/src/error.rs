use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("palette name cannot be empty")]
    EmptyName,
    #[error("palette name is too long ({0} > 50 characters)")]
    NameTooLong(usize),
    #[error("no saved palette with id {0:?}")]
    NotFound(String),
}
