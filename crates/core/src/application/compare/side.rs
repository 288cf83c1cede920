// One side of a comparison: model, candidate result files, selection

use crate::application::compare::date_filter::DateFilter;
use crate::application::compare::question::QuestionSelector;
use crate::application::latest::result_files_for;
use crate::domain::{ModelRun, PromptExchange, ResultFileName};

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSide {
    pub model: String,
    /// Candidate result files, oldest first
    pub candidates: Vec<ResultFileName>,
    /// Result file to display, if one is chosen
    pub selected: Option<String>,
    pub date: DateFilter,
    pub question: QuestionSelector,
}

impl ComparisonSide {
    /// Resolve the candidates and the selected result for one model
    ///
    /// An explicit selection always wins. Without one, the sole candidate is
    /// selected automatically when a date filter is active.
    pub fn resolve<S: AsRef<str>>(
        model: &str,
        files: &[S],
        explicit: Option<&str>,
        date: DateFilter,
        question: QuestionSelector,
    ) -> Self {
        let candidates = result_files_for(files, model);

        let selected = match explicit.filter(|s| !s.is_empty()) {
            Some(file) => Some(file.to_string()),
            None if date.is_active() && candidates.len() == 1 => {
                Some(candidates[0].file_name.clone())
            }
            None => None,
        };

        Self {
            model: model.to_string(),
            candidates,
            selected,
            date,
            question,
        }
    }

    /// Picker labels for the candidates
    pub fn candidate_labels(&self) -> Vec<String> {
        self.candidates.iter().map(ResultFileName::label).collect()
    }

    pub fn visible<'a>(&self, run: &'a ModelRun) -> &'a [PromptExchange] {
        visible_exchanges(run, self.date, self.question)
    }
}

/// Exchanges shown for a run after the date filter and question selector
pub fn visible_exchanges(
    run: &ModelRun,
    date: DateFilter,
    question: QuestionSelector,
) -> &[PromptExchange] {
    if !date.admits(run) {
        return &[];
    }
    question.select(&run.prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(date: &str, n: usize) -> ModelRun {
        ModelRun {
            name: "granite".to_string(),
            date: date.to_string(),
            file_name: format!("granite_{}.json", date),
            total_time: None,
            prompt: (1..=n)
                .map(|i| PromptExchange::new(format!("q{}", i), format!("a{}", i), Some(1.0)))
                .collect(),
        }
    }

    #[test]
    fn test_explicit_selection_wins() {
        let files = vec!["granite_20250101T000000.json", "granite_20250102T000000.json"];
        let side = ComparisonSide::resolve(
            "granite",
            &files,
            Some("granite_20250101T000000.json"),
            DateFilter::none(),
            QuestionSelector::All,
        );
        assert_eq!(side.selected.as_deref(), Some("granite_20250101T000000.json"));
        assert_eq!(side.candidates.len(), 2);
    }

    #[test]
    fn test_sole_candidate_auto_selected_with_date() {
        let files = vec!["granite_20250101T000000.json", "gpt-4o_20250101T000000.json"];
        let date = "2025-01-01".parse().unwrap();
        let side = ComparisonSide::resolve("granite", &files, None, date, QuestionSelector::All);
        assert_eq!(side.selected.as_deref(), Some("granite_20250101T000000.json"));

        let undated =
            ComparisonSide::resolve("granite", &files, None, DateFilter::none(), QuestionSelector::All);
        assert_eq!(undated.selected, None);
    }

    #[test]
    fn test_no_auto_selection_with_several_candidates() {
        let files = vec!["granite_20250101T000000.json", "granite_20250102T000000.json"];
        let date = "2025-01-01".parse().unwrap();
        let side = ComparisonSide::resolve("granite", &files, Some(""), date, QuestionSelector::All);
        assert_eq!(side.selected, None);
        assert_eq!(
            side.candidate_labels(),
            vec!["granite-01-01-2025 12:00am", "granite-02-01-2025 12:00am"]
        );
    }

    #[test]
    fn test_visible_exchanges() {
        let r = run("20250302T101520", 3);
        assert_eq!(
            visible_exchanges(&r, DateFilter::none(), QuestionSelector::All).len(),
            3
        );
        assert_eq!(
            visible_exchanges(&r, DateFilter::none(), QuestionSelector::Number(2))[0].user,
            "q2"
        );

        let other_day = "2025-03-03".parse().unwrap();
        assert!(visible_exchanges(&r, other_day, QuestionSelector::All).is_empty());
    }
}
