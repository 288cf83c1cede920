// Result Index - model -> `model/file` paths, newest first

use std::collections::BTreeMap;
use tracing::warn;

/// File name reserved for the generated index itself
pub const INDEX_FILE_NAME: &str = "index.json";

/// Index served to static mirrors (`prompt-results/index.json`)
pub type ResultIndex = BTreeMap<String, Vec<String>>;

/// Build the index from a directory listing
///
/// # Arguments
/// * `listing` - `(model, file names)` per model directory
///
/// Only `*.json` files other than `index.json` are kept. Models without
/// qualifying files are left out of the index.
pub fn build_index(listing: &[(String, Vec<String>)]) -> ResultIndex {
    let mut index = ResultIndex::new();

    for (model, files) in listing {
        let mut files: Vec<&String> = files
            .iter()
            .filter(|f| f.ends_with(".json") && f.as_str() != INDEX_FILE_NAME)
            .collect();

        if files.is_empty() {
            warn!(model = %model, "No valid JSON files found for model");
            continue;
        }

        files.sort_by(|a, b| b.cmp(a));
        index.insert(
            model.clone(),
            files.into_iter().map(|f| format!("{}/{}", model, f)).collect(),
        );
    }

    index
}
