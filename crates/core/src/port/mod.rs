// Port Layer - Interfaces for external dependencies

pub mod log_store;
pub mod result_store;

// Re-exports
pub use log_store::LogStore;
pub use result_store::ResultStore;

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::{AppError, Result};
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory ResultStore: model -> (file -> contents)
    #[derive(Default)]
    pub struct MockResultStore {
        models: Mutex<BTreeMap<String, BTreeMap<String, String>>>,
        missing_root: bool,
    }

    impl MockResultStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Store whose results root does not exist
        pub fn missing_root() -> Self {
            Self {
                missing_root: true,
                ..Self::default()
            }
        }

        pub fn with_model(self, model: &str) -> Self {
            self.models
                .lock()
                .unwrap()
                .entry(model.to_string())
                .or_default();
            self
        }

        pub fn with_file(self, model: &str, file: &str, contents: &str) -> Self {
            self.models
                .lock()
                .unwrap()
                .entry(model.to_string())
                .or_default()
                .insert(file.to_string(), contents.to_string());
            self
        }
    }

    #[async_trait]
    impl ResultStore for MockResultStore {
        async fn list_models(&self) -> Result<Vec<String>> {
            if self.missing_root {
                return Err(AppError::Config(
                    "Directory 'prompt-results' not found".to_string(),
                ));
            }
            Ok(self.models.lock().unwrap().keys().cloned().collect())
        }

        async fn list_files(&self, model: &str) -> Result<Vec<String>> {
            self.models
                .lock()
                .unwrap()
                .get(model)
                .map(|files| files.keys().cloned().collect())
                .ok_or_else(|| AppError::NotFound(format!("Model '{}' not found", model)))
        }

        async fn read_file(&self, model: &str, file: &str) -> Result<String> {
            self.models
                .lock()
                .unwrap()
                .get(model)
                .and_then(|files| files.get(file).cloned())
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "File '{}' not found in model '{}'",
                        file, model
                    ))
                })
        }

        async fn model_exists(&self, model: &str) -> Result<bool> {
            Ok(self.models.lock().unwrap().contains_key(model))
        }
    }

    /// In-memory LogStore: name -> contents
    #[derive(Default)]
    pub struct MockLogStore {
        logs: Mutex<BTreeMap<String, String>>,
    }

    impl MockLogStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_log(self, name: &str, contents: &str) -> Self {
            self.logs
                .lock()
                .unwrap()
                .insert(name.to_string(), contents.to_string());
            self
        }
    }

    #[async_trait]
    impl LogStore for MockLogStore {
        async fn list_logs(&self) -> Result<Vec<String>> {
            Ok(self.logs.lock().unwrap().keys().cloned().collect())
        }

        async fn read_log(&self, name: &str) -> Result<String> {
            self.logs
                .lock()
                .unwrap()
                .get(name)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Log file '{}' not found", name)))
        }
    }
}
