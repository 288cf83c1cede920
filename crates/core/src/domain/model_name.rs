// Model name helpers

use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+").expect("version pattern is valid"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static INSTRUCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+instruct").expect("instruct pattern is valid"));

/// Family of a model: tag and version fragments removed (`granite3.1:8b` -> `granite`)
pub fn model_family(name: &str) -> String {
    let untagged = name.split(':').next().unwrap_or(name);
    VERSION_RE.replace_all(untagged, "").into_owned()
}

/// Loose key for matching model names across data sources.
///
/// Lowercased, `.`/`:` and whitespace runs become `-`, instruct suffixes dropped.
pub fn normalize_model_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace(['.', ':'], "-");
    let dashed = WHITESPACE_RE.replace_all(&lowered, "-");
    INSTRUCT_RE.replace_all(&dashed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_family() {
        assert_eq!(model_family("granite3.1:8b"), "granite");
        assert_eq!(model_family("granite3.2-dense:8b"), "granite-dense");
        assert_eq!(model_family("gpt-4o"), "gpt-4o");
        assert_eq!(model_family("claude3.5-sonnet"), "claude-sonnet");
    }

    #[test]
    fn test_normalize_model_name() {
        assert_eq!(normalize_model_name("Granite 3.1:8b"), "granite-3-1-8b");
        assert_eq!(
            normalize_model_name("granite-3.1-8b-instruct"),
            "granite-3-1-8b"
        );
        assert_eq!(normalize_model_name("GPT-4o"), "gpt-4o");
    }
}
