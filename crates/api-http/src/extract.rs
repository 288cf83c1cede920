//! Extractors whose rejections use the `{"error": ...}` body

use crate::error::ApiError;
use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use evalboard_core::error::AppError;
use serde::de::DeserializeOwned;

/// `Path` that rejects with a 400 `ApiError`
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))
    }
}

/// `Query` that rejects with a 400 `ApiError`
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))
    }
}
