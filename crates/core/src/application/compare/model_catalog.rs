// Model pick list

use crate::domain::ModelRun;

/// Family keyword listed ahead of the other models
pub const DEFAULT_FEATURED_KEYWORD: &str = "granite";

/// Distinct model names, featured family first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    pub featured: Vec<String>,
    pub others: Vec<String>,
}

impl ModelCatalog {
    /// Build from loaded runs, keeping first-seen order inside each group
    ///
    /// Runs without a name are skipped.
    pub fn from_runs<'a>(runs: impl IntoIterator<Item = &'a ModelRun>, featured_keyword: &str) -> Self {
        let keyword = featured_keyword.to_lowercase();
        let mut catalog = Self::default();

        for run in runs {
            if run.name.is_empty() || catalog.contains(&run.name) {
                continue;
            }
            if run.name.to_lowercase().contains(&keyword) {
                catalog.featured.push(run.name.clone());
            } else {
                catalog.others.push(run.name.clone());
            }
        }

        catalog
    }

    pub fn contains(&self, name: &str) -> bool {
        self.featured.iter().chain(&self.others).any(|n| n == name)
    }

    /// Combined pick list
    pub fn all(&self) -> Vec<String> {
        self.featured.iter().chain(&self.others).cloned().collect()
    }

    /// Case-insensitive substring filter over the pick list
    pub fn filter(&self, input: &str) -> Vec<String> {
        let needle = input.to_lowercase();
        self.all()
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }
}
