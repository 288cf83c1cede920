// Shared filesystem helpers

use evalboard_core::error::AppError;
use std::io::ErrorKind;
use std::path::Path;

// Helper to convert io::Error to AppError, keeping "not found" distinguishable
pub(crate) fn map_io_error(err: std::io::Error, what: impl FnOnce() -> String) -> AppError {
    match err.kind() {
        ErrorKind::NotFound => AppError::NotFound(what()),
        _ => AppError::Io(err),
    }
}

pub(crate) async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

pub(crate) async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Entry names under `dir` accepted by `keep`, sorted
pub(crate) async fn list_entries<F>(dir: &Path, keep: F) -> std::io::Result<Vec<String>>
where
    F: Fn(&str, &std::fs::FileType) -> bool,
{
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        // Non UTF-8 names cannot be addressed over HTTP
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if keep(&name, &file_type) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
