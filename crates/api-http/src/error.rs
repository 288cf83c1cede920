//! HTTP Error Types
//!
//! Maps application errors to status codes and `{"error": ...}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use evalboard_core::error::AppError;
use tracing::{error, warn};

use crate::types::ErrorBody;

/// Status code for an application error
pub fn status_of(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) | AppError::Domain(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Io(_)
        | AppError::Serialization(_)
        | AppError::Config(_)
        | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// AppError wrapper returned by handlers
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        let message = self.0.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use evalboard_core::domain::DomainError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(&AppError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(&AppError::Domain(DomainError::InvalidDate("x".into()))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(&AppError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(&AppError::Config("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
