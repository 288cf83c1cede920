// Pass@1 scores and the comparison verdict

use crate::domain::normalize_model_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const NOT_APPLICABLE: &str = "Not applicable";

/// Mean Pass@1 per model, as a percentage in `0.0..=100.0`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBoard {
    scores: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct ScoredModel {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Data", default)]
    data: Vec<serde_json::Value>,
}

impl ScoreBoard {
    /// Build from `code-assist-data.json`
    ///
    /// Shape: `{ group: [ { "Name": ..., "Data": [ { "Pass@1": "0.61" } ] } ] }`.
    /// Entries that are not applicable or not numeric are ignored; models
    /// with no usable entry get no score.
    pub fn from_code_assist_data(value: &serde_json::Value) -> Self {
        let mut scores = BTreeMap::new();

        let Some(groups) = value.as_object() else {
            return Self { scores };
        };

        for group in groups.values() {
            let Some(models) = group.as_array() else {
                continue;
            };
            for model in models {
                let Ok(model) = ScoredModel::deserialize(model) else {
                    continue;
                };
                let valid: Vec<f64> = model
                    .data
                    .iter()
                    .filter_map(|d| d.get("Pass@1"))
                    .filter_map(pass_at_one)
                    .collect();
                if valid.is_empty() {
                    continue;
                }
                let mean = valid.iter().sum::<f64>() / valid.len() as f64;
                scores.insert(model.name, (mean * 100.0).clamp(0.0, 100.0));
            }
        }

        Self { scores }
    }

    pub fn insert(&mut self, name: impl Into<String>, percent: f64) {
        self.scores.insert(name.into(), percent.clamp(0.0, 100.0));
    }

    /// Score by exact name, then by normalised name
    pub fn get(&self, name: &str) -> Option<f64> {
        if let Some(score) = self.scores.get(name) {
            return Some(*score);
        }
        let wanted = normalize_model_name(name);
        self.scores
            .iter()
            .find(|(candidate, _)| normalize_model_name(candidate) == wanted)
            .map(|(_, score)| *score)
    }

    /// `61.0%`, or `N/A` when the model has no score
    pub fn display(&self, name: &str) -> String {
        self.get(name)
            .map(|s| format!("{:.1}%", s))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn pass_at_one(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) if s != NOT_APPLICABLE && !s.is_empty() => {
            s.trim().parse().ok()
        }
        _ => None,
    }
}

/// Outcome for one side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Strictly higher score than the other side
    Recommended,
    Trailing,
    /// At least one side has no score
    Unscored,
}

impl Verdict {
    /// Verdicts for `(first, second)`
    pub fn between(board: &ScoreBoard, first: &str, second: &str) -> (Verdict, Verdict) {
        match (board.get(first), board.get(second)) {
            (Some(a), Some(b)) if a > b => (Verdict::Recommended, Verdict::Trailing),
            (Some(a), Some(b)) if b > a => (Verdict::Trailing, Verdict::Recommended),
            (Some(_), Some(_)) => (Verdict::Trailing, Verdict::Trailing),
            _ => (Verdict::Unscored, Verdict::Unscored),
        }
    }
}
