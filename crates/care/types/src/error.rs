use thiserror::Error;

/// Result type for boundary validation.
pub type CareResult<T> = Result<T, CareError>;

/// Errors raised while turning loosely shaped documents into typed values.
#[derive(Debug, Error)]
pub enum CareError {
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
