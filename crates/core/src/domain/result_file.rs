// Result File Name (`<model>_<YYYYMMDDTHHMMSS>.json`)

use crate::domain::error::{DomainError, Result};
use crate::domain::timestamp::RunTimestamp;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static RESULT_FILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)_(\d{8}T\d{6})\.json$").expect("result file pattern is valid")
});

/// Parsed prompt-result file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultFileName {
    pub model: String,
    pub timestamp: RunTimestamp,
    /// Base name (no directory part)
    pub file_name: String,
}

impl ResultFileName {
    /// Parse a file name or an index path such as `model/model_20250302T101520.json`.
    ///
    /// Only the part after the last `/` is matched.
    pub fn parse(path: &str) -> Result<Self> {
        let base = base_name(path);
        let caps = RESULT_FILE_RE
            .captures(base)
            .ok_or_else(|| DomainError::InvalidFileName(path.to_string()))?;

        let timestamp = RunTimestamp::parse(&caps[2])?;

        Ok(Self {
            model: caps[1].to_string(),
            timestamp,
            file_name: base.to_string(),
        })
    }

    /// Compose the canonical file name for a model run
    pub fn compose(model: &str, timestamp: RunTimestamp) -> String {
        format!("{}_{}.json", model, timestamp)
    }

    /// Result picker label: `<model>-DD-MM-YYYY h:MMam`
    pub fn label(&self) -> String {
        format!("{}-{}", self.model, self.timestamp.display_label())
    }
}

impl fmt::Display for ResultFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

/// Last path segment of an index entry
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_file_name() {
        let parsed = ResultFileName::parse("granite3.1:8b_20250302T101520.json").unwrap();
        assert_eq!(parsed.model, "granite3.1:8b");
        assert_eq!(parsed.timestamp.to_string(), "20250302T101520");
        assert_eq!(parsed.file_name, "granite3.1:8b_20250302T101520.json");
    }

    #[test]
    fn test_parse_index_path_uses_base_name() {
        let parsed =
            ResultFileName::parse("claude3.5-sonnet/claude3.5-sonnet_20250110T080000.json").unwrap();
        assert_eq!(parsed.model, "claude3.5-sonnet");
        assert_eq!(parsed.file_name, "claude3.5-sonnet_20250110T080000.json");
    }

    #[test]
    fn test_model_may_contain_underscores() {
        let parsed = ResultFileName::parse("my_model_v2_20250302T101520.json").unwrap();
        assert_eq!(parsed.model, "my_model_v2");
    }

    #[test]
    fn test_parse_rejects_non_matching_names() {
        assert!(matches!(
            ResultFileName::parse("index.json"),
            Err(DomainError::InvalidFileName(_))
        ));
        assert!(ResultFileName::parse("granite_20250302T101520.txt").is_err());
        assert!(ResultFileName::parse("_20250302T101520.json").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_timestamp() {
        assert!(matches!(
            ResultFileName::parse("granite_20251340T101520.json"),
            Err(DomainError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_label_and_compose() {
        let parsed = ResultFileName::parse("gpt-4o_20250302T134500.json").unwrap();
        assert_eq!(parsed.label(), "gpt-4o-02-03-2025 1:45pm");
        assert_eq!(
            ResultFileName::compose("gpt-4o", parsed.timestamp),
            "gpt-4o_20250302T134500.json"
        );
    }
}
