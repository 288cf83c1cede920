// Filesystem ResultStore Implementation
//
// Layout: <root>/<model>/<model>_<YYYYMMDDTHHMMSS>.json

use crate::io::{is_dir, list_entries, map_io_error};
use async_trait::async_trait;
use evalboard_core::error::{AppError, Result};
use evalboard_core::port::ResultStore;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

pub struct FsResultStore {
    root: PathBuf,
}

impl FsResultStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn root_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

#[async_trait]
impl ResultStore for FsResultStore {
    async fn list_models(&self) -> Result<Vec<String>> {
        if !is_dir(&self.root).await {
            error!(root = %self.root.display(), "Results directory not found");
            return Err(AppError::Config(format!(
                "Directory '{}' not found at {}",
                self.root_name(),
                self.root.display()
            )));
        }

        let models = list_entries(&self.root, |_, ft| ft.is_dir()).await?;
        debug!(count = models.len(), "Model directories scanned");
        Ok(models)
    }

    async fn list_files(&self, model: &str) -> Result<Vec<String>> {
        let dir = self.root.join(model);
        list_entries(&dir, |name, ft| !ft.is_dir() && name.ends_with(".json"))
            .await
            .map_err(|e| map_io_error(e, || format!("Model '{}' not found", model)))
    }

    async fn read_file(&self, model: &str, file: &str) -> Result<String> {
        let path = self.root.join(model).join(file);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            map_io_error(e, || {
                format!("File '{}' not found in model '{}'", file, model)
            })
        })
    }

    async fn model_exists(&self, model: &str) -> Result<bool> {
        if !is_dir(&self.root).await {
            return Err(AppError::Config(format!(
                "Directory '{}' not found at {}",
                self.root_name(),
                self.root.display()
            )));
        }
        Ok(is_dir(&self.root.join(model)).await)
    }
}
