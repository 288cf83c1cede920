// Filesystem LogStore Implementation

use crate::io::{is_dir, is_file, list_entries, map_io_error};
use async_trait::async_trait;
use evalboard_core::error::{AppError, Result};
use evalboard_core::port::LogStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Listing published alongside the logs for static mirrors
const LOG_LISTING_FILE: &str = "logs.json";

pub struct FsLogStore {
    root: PathBuf,
}

impl FsLogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl LogStore for FsLogStore {
    async fn list_logs(&self) -> Result<Vec<String>> {
        if !is_dir(&self.root).await {
            return Err(AppError::Config(format!(
                "Log directory not found at {}",
                self.root.display()
            )));
        }

        let logs = list_entries(&self.root, |name, ft| {
            ft.is_file() && name != LOG_LISTING_FILE
        })
        .await?;
        debug!(count = logs.len(), "Log files scanned");
        Ok(logs)
    }

    async fn read_log(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        // Only regular files are listed, so only they are readable
        if !is_file(&path).await {
            return Err(AppError::NotFound(format!("Log file '{}' not found", name)));
        }
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| map_io_error(e, || format!("Log file '{}' not found", name)))?;
        // Server logs may carry raw model output that is not valid UTF-8
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
