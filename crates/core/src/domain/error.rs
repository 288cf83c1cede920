// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid result file name: {0}")]
    InvalidFileName(String),

    #[error("Invalid run timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid question selector: {0}")]
    InvalidQuestion(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
