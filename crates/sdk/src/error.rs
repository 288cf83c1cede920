//! SDK Error Types

use evalboard_core::error::AppError;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No data source available (mirror: {mirror}; local: {local})")]
    NoSource { mirror: String, local: String },

    #[error(transparent)]
    Core(#[from] AppError),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => SdkError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            },
            None if e.is_timeout() => SdkError::Transport(format!("Request timed out: {}", e)),
            None if e.is_connect() => SdkError::Transport(format!("Connection failed: {}", e)),
            None => SdkError::Transport(e.to_string()),
        }
    }
}

impl SdkError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::Http { status: 404, .. })
    }
}
