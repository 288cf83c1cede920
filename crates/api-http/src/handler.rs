//! HTTP Route Handlers

use crate::error::ApiResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::server::AppState;
use crate::types::{HealthResponse, LatestResponse, LogQuery};
use axum::extract::State;
use axum::Json;
use evalboard_core::application::{LogSummary, ResultIndex};
use tracing::debug;

/// GET /healthz
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: evalboard_core::VERSION.to_string(),
    })
}

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.catalog.list_models().await?))
}

/// GET /api/models/:model/files
pub async fn list_files(
    State(state): State<AppState>,
    ApiPath(model): ApiPath<String>,
) -> ApiResult<Json<Vec<String>>> {
    debug!(model = %model, "Listing result files");
    Ok(Json(state.catalog.list_files(&model).await?))
}

/// GET /api/models/:model/files/:file
pub async fn read_file(
    State(state): State<AppState>,
    ApiPath((model, file)): ApiPath<(String, String)>,
) -> ApiResult<Json<serde_json::Value>> {
    Ok(Json(state.catalog.read_result(&model, &file).await?))
}

/// GET /api/models/:model/latest
pub async fn latest(
    State(state): State<AppState>,
    ApiPath(model): ApiPath<String>,
) -> ApiResult<Json<LatestResponse>> {
    let (file_name, document) = state.catalog.latest_result(&model).await?;
    Ok(Json(LatestResponse {
        file_name,
        document,
    }))
}

/// GET /api/index
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<ResultIndex>> {
    Ok(Json(state.catalog.build_index().await?))
}

/// GET /logs
pub async fn list_logs(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let names = state
        .logs
        .list()
        .await?
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    Ok(Json(names))
}

/// GET /logs/:file?tail=N&search=T
pub async fn read_log(
    State(state): State<AppState>,
    ApiPath(file): ApiPath<String>,
    ApiQuery(query): ApiQuery<LogQuery>,
) -> ApiResult<String> {
    let text = state
        .logs
        .view(&file, query.tail, query.search.as_deref())
        .await?;
    Ok(text)
}

/// GET /logs/:file/summary
pub async fn log_summary(
    State(state): State<AppState>,
    ApiPath(file): ApiPath<String>,
) -> ApiResult<Json<LogSummary>> {
    Ok(Json(state.logs.summary(&file).await?))
}
