// Log Service - Listing, tailing and summarising model-server logs

use crate::application::catalog::validate_segment;
use crate::domain::LogFileEntry;
use crate::error::Result;
use crate::port::LogStore;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

static LISTENING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Listening on (\S+) \(version ([^)]+)\)").expect("listening pattern is valid")
});
static TOTAL_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)total time").expect("total time pattern is valid"));
static MILLIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*ms").expect("millis pattern is valid"));
static TIME_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"time=("[^"]*"|\S+)"#).expect("time field pattern is valid"));

pub struct LogService {
    store: Arc<dyn LogStore>,
}

impl LogService {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Log files with the date embedded in their name
    pub async fn list(&self) -> Result<Vec<LogFileEntry>> {
        let names = self.store.list_logs().await?;
        debug!(count = names.len(), "Log files found");
        Ok(names.into_iter().map(LogFileEntry::from_name).collect())
    }

    pub async fn read(&self, name: &str) -> Result<String> {
        validate_segment("log", name)?;
        self.store.read_log(name).await
    }

    /// Log text after the optional search and tail filters
    ///
    /// # Arguments
    /// * `name` - log file name
    /// * `tail` - keep only the last N lines
    /// * `term` - keep only lines containing this text (applied before `tail`)
    pub async fn view(
        &self,
        name: &str,
        tail_lines: Option<usize>,
        term: Option<&str>,
    ) -> Result<String> {
        let text = self.read(name).await?;
        Ok(filter_lines(&text, term, tail_lines).join("\n"))
    }

    pub async fn summary(&self, name: &str) -> Result<LogSummary> {
        let text = self.read(name).await?;
        Ok(LogSummary::parse(&text))
    }
}

/// Last `n` lines
pub fn tail(text: &str, n: usize) -> Vec<&str> {
    last(text.lines().collect(), n)
}

/// Log view lines: `search` first when a non-empty term is given, then `tail`
///
/// # Arguments
/// * `text` - log contents
/// * `term` - keep only lines containing this text
/// * `tail_lines` - keep only the last N of the remaining lines
pub fn filter_lines<'a>(
    text: &'a str,
    term: Option<&str>,
    tail_lines: Option<usize>,
) -> Vec<&'a str> {
    match (term.filter(|t| !t.is_empty()), tail_lines) {
        (None, None) => text.lines().collect(),
        (None, Some(n)) => tail(text, n),
        (Some(term), None) => search(text, term),
        (Some(term), Some(n)) => last(search(text, term), n),
    }
}

fn last(mut lines: Vec<&str>, n: usize) -> Vec<&str> {
    let skip = lines.len().saturating_sub(n);
    lines.drain(..skip);
    lines
}

/// Trimmed lines containing `term`
pub fn search<'a>(text: &'a str, term: &str) -> Vec<&'a str> {
    text.lines()
        .filter(|line| line.contains(term))
        .map(str::trim)
        .collect()
}

/// Figures extracted from a model-server log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    pub lines: usize,
    pub errors: usize,
    pub warnings: usize,
    pub version: Option<String>,
    pub listen_address: Option<String>,
    pub response_times_ms: Vec<f64>,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
}

impl LogSummary {
    pub fn parse(text: &str) -> Self {
        let mut summary = Self::default();

        for line in text.lines() {
            summary.lines += 1;

            if line.contains("level=ERROR") {
                summary.errors += 1;
            } else if line.contains("level=WARN") {
                summary.warnings += 1;
            }

            if summary.listen_address.is_none() {
                if let Some(caps) = LISTENING_RE.captures(line) {
                    summary.listen_address = Some(caps[1].to_string());
                    summary.version = Some(caps[2].to_string());
                }
            }

            if TOTAL_TIME_RE.is_match(line) {
                if let Some(ms) = MILLIS_RE
                    .captures(line)
                    .and_then(|caps| caps[1].parse::<f64>().ok())
                {
                    summary.response_times_ms.push(ms);
                }
            }

            if let Some(caps) = TIME_FIELD_RE.captures(line) {
                let value = caps[1].trim_matches('"').to_string();
                if summary.first_timestamp.is_none() {
                    summary.first_timestamp = Some(value.clone());
                }
                summary.last_timestamp = Some(value);
            }
        }

        summary
    }

    pub fn total_response_ms(&self) -> f64 {
        self.response_times_ms.iter().sum()
    }

    pub fn mean_response_ms(&self) -> Option<f64> {
        if self.response_times_ms.is_empty() {
            return None;
        }
        Some(self.total_response_ms() / self.response_times_ms.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::port::mocks::MockLogStore;

    const LOG: &str = "\
time=2025-03-02T10:15:20.000+01:00 level=INFO source=routes.go:1238 msg=\"Listening on 127.0.0.1:11434 (version 0.5.7)\"
time=2025-03-02T10:15:21.000+01:00 level=WARN source=gpu.go:80 msg=\"no compatible GPUs were discovered\"
llama_perf_context_print:       total time =    1523.40 ms /   210 tokens
time=2025-03-02T10:16:00.000+01:00 level=ERROR source=server.go:12 msg=\"request failed\"
llama_perf_context_print:       Total Time =     476.60 ms /    80 tokens
time=2025-03-02T10:17:00.000+01:00 level=INFO msg=done";

    fn service() -> LogService {
        let store = MockLogStore::new()
            .with_log("ollama_server_20250302_101520.log", LOG)
            .with_log("notes.txt", "a\nb\nc");
        LogService::new(Arc::new(store))
    }

    #[test]
    fn test_summary_fields() {
        let summary = LogSummary::parse(LOG);
        assert_eq!(summary.lines, 6);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.version.as_deref(), Some("0.5.7"));
        assert_eq!(summary.listen_address.as_deref(), Some("127.0.0.1:11434"));
        assert_eq!(summary.response_times_ms, vec![1523.40, 476.60]);
        assert!((summary.total_response_ms() - 2000.0).abs() < 1e-9);
        assert!((summary.mean_response_ms().unwrap() - 1000.0).abs() < 1e-9);
        assert_eq!(
            summary.first_timestamp.as_deref(),
            Some("2025-03-02T10:15:20.000+01:00")
        );
        assert_eq!(
            summary.last_timestamp.as_deref(),
            Some("2025-03-02T10:17:00.000+01:00")
        );
    }

    #[test]
    fn test_summary_of_empty_log() {
        let summary = LogSummary::parse("");
        assert_eq!(summary, LogSummary::default());
        assert_eq!(summary.mean_response_ms(), None);
    }

    #[test]
    fn test_tail_and_search() {
        assert_eq!(tail("a\nb\nc", 2), vec!["b", "c"]);
        assert_eq!(tail("a\nb", 10), vec!["a", "b"]);
        assert!(tail("a", 0).is_empty());
        assert_eq!(search("  x1 \ny\n x2", "x"), vec!["x1", "x2"]);
        assert!(search("abc", "ABC").is_empty());
    }

    #[test]
    fn test_filter_lines() {
        let text = "a1\nb\n a2 \nc\na3";
        assert_eq!(filter_lines(text, None, None).len(), 5);
        assert_eq!(filter_lines(text, None, Some(2)), vec!["c", "a3"]);
        assert_eq!(filter_lines(text, Some("a"), None), vec!["a1", "a2", "a3"]);
        assert_eq!(filter_lines(text, Some("a"), Some(2)), vec!["a2", "a3"]);
        // An empty term does not filter
        assert_eq!(filter_lines(text, Some(""), Some(1)), vec!["a3"]);
    }

    #[tokio::test]
    async fn test_list_with_dates() {
        let entries = service().list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, "Unknown Date");
        assert_eq!(entries[1].date, "20250302T101520");
    }

    #[tokio::test]
    async fn test_view_search_then_tail() {
        let text = service()
            .view("ollama_server_20250302_101520.log", Some(1), Some("level="))
            .await
            .unwrap();
        assert_eq!(text, "time=2025-03-02T10:17:00.000+01:00 level=INFO msg=done");

        let whole = service().view("notes.txt", None, None).await.unwrap();
        assert_eq!(whole, "a\nb\nc");
    }

    #[tokio::test]
    async fn test_read_rejects_traversal_and_missing() {
        assert!(matches!(
            service().read("../etc/passwd").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service().read("missing.log").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_summary_via_service() {
        let summary = service()
            .summary("ollama_server_20250302_101520.log")
            .await
            .unwrap();
        assert_eq!(summary.errors, 1);
    }
}
