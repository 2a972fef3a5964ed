use thiserror::Error;

/// Result type for treatment store reads.
pub type StorageResult<T> = Result<T, StorageError>;

/// Treatment store errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}
