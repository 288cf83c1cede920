// Log Store Port (Interface)

use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to model-server log files
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Log file names, sorted
    async fn list_logs(&self) -> Result<Vec<String>>;

    /// Full text of one log file
    async fn read_log(&self, name: &str) -> Result<String>;
}
