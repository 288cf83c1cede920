//! Data sources and mirror-first selection

use crate::error::{Result, SdkError};
use crate::types::{LoadMode, LoadedRun, SourceKind};
use async_trait::async_trait;
use evalboard_core::application::{latest_file, result_files_for};
use evalboard_core::domain::ResultDocument;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

/// Read access to results and logs, local or mirrored
#[async_trait]
pub trait DataSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    async fn list_models(&self) -> Result<Vec<String>>;

    /// Result file names (no directory part) of one model
    async fn list_result_files(&self, model: &str) -> Result<Vec<String>>;

    async fn fetch_document(&self, model: &str, file: &str) -> Result<ResultDocument>;

    async fn list_logs(&self) -> Result<Vec<String>>;

    async fn fetch_log(&self, name: &str) -> Result<String>;
}

/// Pick the mirror when it answers, otherwise the local server
///
/// Each candidate is probed with `list_models`. A failing mirror is logged
/// and skipped; when the local server fails too, both messages are returned.
pub async fn select_source(
    mirror: Option<Arc<dyn DataSource>>,
    local: Arc<dyn DataSource>,
) -> Result<Arc<dyn DataSource>> {
    let mirror_error = match mirror {
        Some(mirror) => match mirror.list_models().await {
            Ok(models) => {
                info!(models = models.len(), "Using mirror data source");
                return Ok(mirror);
            }
            Err(e) => {
                warn!(error = %e, "Mirror unavailable, falling back to local server");
                e.to_string()
            }
        },
        None => "not configured".to_string(),
    };

    match local.list_models().await {
        Ok(models) => {
            info!(models = models.len(), "Using local data source");
            Ok(local)
        }
        Err(e) => Err(SdkError::NoSource {
            mirror: mirror_error,
            local: e.to_string(),
        }),
    }
}

/// Load runs for several models concurrently
///
/// A model whose listing or documents fail to load contributes no runs;
/// the failure is logged and the other models are unaffected. Output keeps
/// the order of `models`.
pub async fn load_runs(
    source: &dyn DataSource,
    models: &[String],
    mode: LoadMode,
) -> Vec<LoadedRun> {
    let loads = models.iter().map(|model| async move {
        match load_model(source, model, mode).await {
            Ok(runs) => runs,
            Err(e) => {
                warn!(model = %model, error = %e, "Failed to load runs");
                Vec::new()
            }
        }
    });

    join_all(loads).await.into_iter().flatten().collect()
}

async fn load_model(
    source: &dyn DataSource,
    model: &str,
    mode: LoadMode,
) -> Result<Vec<LoadedRun>> {
    let files = source.list_result_files(model).await?;

    let wanted: Vec<String> = match mode {
        LoadMode::Latest => latest_file(&files, model)
            .map(|f| vec![f.to_string()])
            .unwrap_or_default(),
        LoadMode::All => result_files_for(&files, model)
            .into_iter()
            .map(|f| f.file_name)
            .collect(),
    };

    if wanted.is_empty() {
        warn!(model = %model, "No valid files with timestamps found");
    }

    let mut runs = Vec::new();
    for file in wanted {
        let document = source.fetch_document(model, &file).await?;
        runs.extend(document.into_runs().into_iter().map(|run| LoadedRun {
            model: model.to_string(),
            file_name: file.clone(),
            run,
        }));
    }
    Ok(runs)
}
