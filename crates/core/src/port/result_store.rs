// Result Store Port (Interface)

use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to the prompt-results folder
///
/// Layout: one directory per model, `*.json` result files inside.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Model directory names, sorted
    async fn list_models(&self) -> Result<Vec<String>>;

    /// `*.json` file names inside a model directory, sorted
    async fn list_files(&self, model: &str) -> Result<Vec<String>>;

    /// Raw contents of one result file
    async fn read_file(&self, model: &str, file: &str) -> Result<String>;

    /// Whether a model directory exists
    async fn model_exists(&self, model: &str) -> Result<bool>;
}
