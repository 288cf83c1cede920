// BigCodeBench leaderboard ranking and paging

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Rows fetched per request from the datasets-server rows API
pub const ROWS_PER_FETCH: usize = 100;

/// Hugging Face datasets-server
pub const DATASETS_SERVER_URL: &str = "https://datasets-server.huggingface.co";
const UNKNOWN_MODEL: &str = "Unknown";

/// Which BigCodeBench results dataset to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardSplit {
    #[default]
    Full,
    Hard,
}

impl LeaderboardSplit {
    pub fn dataset(&self) -> &'static str {
        match self {
            LeaderboardSplit::Full => "bigcode/bigcodebench-results",
            LeaderboardSplit::Hard => "bigcode/bigcodebench-hard-results",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LeaderboardSplit::Full => "Full",
            LeaderboardSplit::Hard => "Hard",
        }
    }

    /// Rows API URL for the first page of the dataset
    pub fn url(&self) -> String {
        self.rows_url(DATASETS_SERVER_URL)
    }

    pub fn rows_url(&self, server: &str) -> String {
        format!(
            "{}/rows?dataset={}&config=default&split=train&offset=0&length={}",
            server.trim_end_matches('/'),
            self.dataset().replace('/', "%2F"),
            ROWS_PER_FETCH
        )
    }
}

/// Raw leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default = "unknown_model", deserialize_with = "deserialize_model")]
    pub model: String,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub complete: f64,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub instruct: f64,
}

impl LeaderboardEntry {
    pub fn average(&self) -> f64 {
        (self.complete + self.instruct) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub model: String,
    pub complete: f64,
    pub instruct: f64,
    pub average: f64,
}

impl LeaderboardRow {
    /// Top three ranks are highlighted
    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }
}

#[derive(Deserialize)]
struct RowsResponse {
    #[serde(default)]
    rows: Vec<RowEnvelope>,
}

#[derive(Deserialize)]
struct RowEnvelope {
    row: LeaderboardEntry,
}

/// Entries from a rows API response (`{"rows": [{"row": {...}}]}`)
pub fn entries_from_rows(value: serde_json::Value) -> serde_json::Result<Vec<LeaderboardEntry>> {
    let response: RowsResponse = serde_json::from_value(value)?;
    Ok(response.rows.into_iter().map(|r| r.row).collect())
}

/// Rank entries by the average of complete and instruct, best first
///
/// Equal averages keep their input order.
pub fn rank_leaderboard(entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardRow> {
    let mut entries = entries;
    entries.sort_by(|a, b| b.average().total_cmp(&a.average()));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| LeaderboardRow {
            rank: i + 1,
            average: e.average(),
            model: e.model,
            complete: e.complete,
            instruct: e.instruct,
        })
        .collect()
}

/// One 1-based page; pages past the end are empty
pub fn paginate<T>(rows: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(rows.len());
    &rows[start..end]
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

fn unknown_model() -> String {
    UNKNOWN_MODEL.to_string()
}

fn deserialize_model<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|m| !m.is_empty())
        .unwrap_or_else(unknown_model))
}

fn deserialize_score<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
