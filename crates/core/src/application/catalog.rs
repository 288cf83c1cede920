// Catalog Service - Browsing use cases over the result store

use crate::application::index::{build_index, ResultIndex};
use crate::application::latest::latest_file;
use crate::domain::ResultDocument;
use crate::error::{AppError, Result};
use crate::port::ResultStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Catalog Service (model listing, file listing, result reads)
pub struct CatalogService {
    store: Arc<dyn ResultStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    /// Model directory names
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let models = self.store.list_models().await?;
        info!(count = models.len(), "Models found");
        Ok(models)
    }

    /// Result file names of a model
    ///
    /// Returns `NotFound` if the model directory does not exist.
    pub async fn list_files(&self, model: &str) -> Result<Vec<String>> {
        validate_segment("model", model)?;

        if !self.store.model_exists(model).await? {
            return Err(AppError::NotFound(format!("Model '{}' not found", model)));
        }

        let files = self.store.list_files(model).await?;
        debug!(model = %model, count = files.len(), "Result files found");
        Ok(files)
    }

    /// Parsed JSON of one result file
    pub async fn read_result(&self, model: &str, file: &str) -> Result<serde_json::Value> {
        validate_segment("model", model)?;
        validate_segment("file", file)?;

        let raw = self.store.read_file(model, file).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Index of every model's result files (newest first)
    pub async fn build_index(&self) -> Result<ResultIndex> {
        let mut listing = Vec::new();
        for model in self.store.list_models().await? {
            let files = self.store.list_files(&model).await?;
            listing.push((model, files));
        }
        Ok(build_index(&listing))
    }

    /// Newest result file of a model, parsed
    pub async fn latest_result(&self, model: &str) -> Result<(String, ResultDocument)> {
        let files = self.list_files(model).await?;
        let latest = latest_file(&files, model)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No valid files with timestamps found for model '{}'",
                    model
                ))
            })?
            .to_string();

        let value = self.read_result(model, &latest).await?;
        let document = ResultDocument::from_value(value)?;
        Ok((latest, document))
    }
}

/// Reject path segments that could escape the store root
pub fn validate_segment(kind: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} name is empty", kind)));
    }
    let special = value == "." || value == "..";
    if special || value.contains('/') || value.contains('\\') || value.contains('\0') {
        return Err(AppError::Validation(format!(
            "{} name '{}' is not a plain file name",
            kind, value
        )));
    }
    Ok(())
}
