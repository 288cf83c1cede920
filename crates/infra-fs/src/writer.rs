// Offline writers: results index and converted result files

use evalboard_core::application::index::INDEX_FILE_NAME;
use evalboard_core::application::ResultIndex;
use evalboard_core::domain::{ResultDocument, ResultFileName, RunTimestamp};
use evalboard_core::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `<root>/index.json`, creating `root` if needed
pub async fn write_index(root: &Path, index: &ResultIndex) -> Result<PathBuf> {
    tokio::fs::create_dir_all(root).await?;

    let path = root.join(INDEX_FILE_NAME);
    let json = serde_json::to_string_pretty(index)?;
    tokio::fs::write(&path, json).await?;

    info!(path = %path.display(), models = index.len(), "Index written");
    Ok(path)
}

/// Write `<root>/<model>/<model>_<ts>.json`
///
/// # Arguments
/// * `root` - results directory
/// * `document` - converted result document
/// * `model` - model folder and file prefix
/// * `timestamp` - run time used in the file name
pub async fn write_result(
    root: &Path,
    document: &ResultDocument,
    model: &str,
    timestamp: RunTimestamp,
) -> Result<PathBuf> {
    let dir = root.join(model);
    tokio::fs::create_dir_all(&dir).await?;

    let path = dir.join(ResultFileName::compose(model, timestamp));
    let json = serde_json::to_string_pretty(document)?;
    tokio::fs::write(&path, json).await?;

    info!(path = %path.display(), model = %model, "Result file written");
    Ok(path)
}
