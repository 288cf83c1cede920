//! HTTP Request/Response Types

use evalboard_core::domain::ResultDocument;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// GET /healthz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /api/models/:model/latest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestResponse {
    pub file_name: String,
    pub document: ResultDocument,
}

/// GET /logs/:file query
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub tail: Option<usize>,
    pub search: Option<String>,
}
