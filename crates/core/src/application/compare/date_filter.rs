// Per-model run date filter

use crate::domain::error::{DomainError, Result};
use crate::domain::ModelRun;
use chrono::NaiveDate;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFilter(Option<NaiveDate>);

impl DateFilter {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn on(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Whether a run's exchanges are visible under this filter
    ///
    /// Inactive filters admit every run. Active filters admit runs created on
    /// the selected day; a run with an unparseable creation time is hidden.
    pub fn admits(&self, run: &ModelRun) -> bool {
        match self.0 {
            None => true,
            Some(day) => run.created_at().is_some_and(|ts| ts.date() == day),
        }
    }

    /// Header tag: the selected day as `DD-MM-YYYY`, otherwise `Today`
    pub fn tag(&self) -> String {
        self.0
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_else(|| "Today".to_string())
    }
}

impl FromStr for DateFilter {
    type Err = DomainError;

    /// `YYYY-MM-DD`; an empty string clears the filter
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::none());
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self::on)
            .map_err(|_| DomainError::InvalidDate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(date: &str) -> ModelRun {
        ModelRun {
            name: "granite".to_string(),
            date: date.to_string(),
            file_name: String::new(),
            total_time: None,
            prompt: vec![],
        }
    }

    #[test]
    fn test_inactive_admits_everything() {
        let filter = DateFilter::none();
        assert!(filter.admits(&run("20250302T101520")));
        assert!(filter.admits(&run("garbage")));
        assert_eq!(filter.tag(), "Today");
    }

    #[test]
    fn test_active_matches_calendar_day() {
        let filter: DateFilter = "2025-03-02".parse().unwrap();
        assert!(filter.admits(&run("20250302T000000")));
        assert!(filter.admits(&run("20250302T235959")));
        assert!(!filter.admits(&run("20250303T000000")));
        assert!(!filter.admits(&run("")));
        assert_eq!(filter.tag(), "02-03-2025");
    }

    #[test]
    fn test_parse() {
        assert!(!"".parse::<DateFilter>().unwrap().is_active());
        assert!(matches!(
            "02/03/2025".parse::<DateFilter>(),
            Err(DomainError::InvalidDate(_))
        ));
    }
}
