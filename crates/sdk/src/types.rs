//! SDK Request/Response Types

use evalboard_core::domain::{ModelRun, ResultDocument};
use serde::{Deserialize, Serialize};
use std::fmt;

/// GET /healthz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// GET /api/models/:model/latest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestResult {
    pub file_name: String,
    pub document: ResultDocument,
}

/// Where result data is being read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Static hosting (`index.json` + raw files)
    Mirror,
    /// The evalboard server
    Local,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Mirror => write!(f, "mirror"),
            SourceKind::Local => write!(f, "local server"),
        }
    }
}

/// How many result files to read per model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Newest file only
    #[default]
    Latest,
    All,
}

/// A run together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRun {
    pub model: String,
    pub file_name: String,
    pub run: ModelRun,
}
