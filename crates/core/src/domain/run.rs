// Prompt-result document model
//
// On disk: `{ "0": [ { name, date, file_name, total_time, prompt: [...] } ] }`

use crate::domain::timestamp::RunTimestamp;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One user/assistant exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptExchange {
    pub user: String,
    pub assistant: String,
    /// Response time in milliseconds
    #[serde(default, deserialize_with = "deserialize_millis")]
    pub time: Option<f64>,
}

impl PromptExchange {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>, time: Option<f64>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
            time,
        }
    }
}

/// One evaluation run of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRun {
    pub name: String,
    /// Creation time in compact form (`20250302T101520`)
    #[serde(default, alias = "created_at")]
    pub date: String,
    #[serde(default)]
    pub file_name: String,
    /// Total response time in milliseconds
    #[serde(default, deserialize_with = "deserialize_millis")]
    pub total_time: Option<f64>,
    #[serde(default)]
    pub prompt: Vec<PromptExchange>,
}

impl ModelRun {
    pub fn created_at(&self) -> Option<RunTimestamp> {
        RunTimestamp::parse(&self.date).ok()
    }

    /// Recorded total, or the sum of the exchange times that are known
    pub fn total_response_ms(&self) -> Option<f64> {
        if self.total_time.is_some() {
            return self.total_time;
        }
        let times: Vec<f64> = self.prompt.iter().filter_map(|p| p.time).collect();
        if times.is_empty() {
            None
        } else {
            Some(times.iter().sum())
        }
    }
}

/// A whole result file: group key -> runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultDocument(pub BTreeMap<String, Vec<ModelRun>>);

impl ResultDocument {
    /// Single-run document under group `"0"`
    pub fn single(run: ModelRun) -> Self {
        let mut groups = BTreeMap::new();
        groups.insert("0".to_string(), vec![run]);
        Self(groups)
    }

    /// All runs in group-key order
    pub fn runs(&self) -> impl Iterator<Item = &ModelRun> {
        self.0.values().flatten()
    }

    pub fn into_runs(self) -> Vec<ModelRun> {
        self.0.into_values().flatten().collect()
    }

    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

/// Accepts a number, a numeric string, an empty string or null
fn deserialize_millis<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "0": [{
                "name": "granite3.1:8b",
                "date": "20250302T101520",
                "file_name": "granite3.1:8b_20250302T101520.json",
                "total_time": 3500.5,
                "prompt": [
                    {"user": "hi", "assistant": "hello", "time": 1500.5},
                    {"user": "write code", "assistant": "```rust\nfn main() {}\n```", "time": 2000}
                ]
            }]
        })
    }

    #[test]
    fn test_parse_document() {
        let doc = ResultDocument::from_value(sample()).unwrap();
        let runs: Vec<_> = doc.runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].name, "granite3.1:8b");
        assert_eq!(runs[0].prompt.len(), 2);
        assert_eq!(runs[0].prompt[1].time, Some(2000.0));
        assert_eq!(
            runs[0].created_at().unwrap().to_string(),
            "20250302T101520"
        );
    }

    #[test]
    fn test_lenient_time_fields() {
        let doc = ResultDocument::from_value(json!({
            "0": [{
                "name": "gpt-4o",
                "date": "",
                "file_name": "",
                "total_time": "",
                "prompt": [
                    {"user": "a", "assistant": "b", "time": null},
                    {"user": "c", "assistant": "d", "time": "250"},
                    {"user": "e", "assistant": "f"}
                ]
            }]
        }))
        .unwrap();
        let run = doc.runs().next().unwrap();
        assert_eq!(run.total_time, None);
        assert_eq!(run.prompt[0].time, None);
        assert_eq!(run.prompt[1].time, Some(250.0));
        assert_eq!(run.prompt[2].time, None);
        assert_eq!(run.total_response_ms(), Some(250.0));
        assert!(run.created_at().is_none());
    }

    #[test]
    fn test_created_at_alias() {
        let doc = ResultDocument::from_value(json!({
            "0": [{"name": "m", "created_at": "20250101T000000", "prompt": []}]
        }))
        .unwrap();
        assert_eq!(doc.runs().next().unwrap().date, "20250101T000000");
    }

    #[test]
    fn test_runs_flatten_groups_in_key_order() {
        let doc = ResultDocument::from_value(json!({
            "1": [{"name": "second"}],
            "0": [{"name": "first"}, {"name": "also-first"}]
        }))
        .unwrap();
        let names: Vec<_> = doc.runs().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "also-first", "second"]);
    }

    #[test]
    fn test_serialize_keeps_group_shape() {
        let doc = ResultDocument::from_value(sample()).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["0"].is_array());
        assert_eq!(value["0"][0]["total_time"], json!(3500.5));
    }
}
