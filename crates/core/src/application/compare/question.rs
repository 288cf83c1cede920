// Question selector ("All" or "Question N")

use crate::domain::error::{DomainError, Result};
use crate::domain::PromptExchange;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionSelector {
    #[default]
    All,
    /// 1-based question number
    Number(usize),
}

impl QuestionSelector {
    /// Dropdown options for a transcript of `count` exchanges
    pub fn options(count: usize) -> Vec<String> {
        std::iter::once("All".to_string())
            .chain((1..=count).map(|n| format!("Question {}", n)))
            .collect()
    }

    /// Exchanges picked by this selector; out-of-range numbers pick nothing
    pub fn select<'a>(&self, exchanges: &'a [PromptExchange]) -> &'a [PromptExchange] {
        match *self {
            QuestionSelector::All => exchanges,
            QuestionSelector::Number(n) if n >= 1 && n <= exchanges.len() => {
                &exchanges[n - 1..n]
            }
            QuestionSelector::Number(_) => &[],
        }
    }
}

impl FromStr for QuestionSelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(QuestionSelector::All);
        }

        let number = trimmed
            .strip_prefix("Question")
            .or_else(|| trimmed.strip_prefix("question"))
            .unwrap_or(trimmed)
            .trim();

        match number.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(QuestionSelector::Number(n)),
            _ => Err(DomainError::InvalidQuestion(s.to_string())),
        }
    }
}

impl fmt::Display for QuestionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSelector::All => write!(f, "All"),
            QuestionSelector::Number(n) => write!(f, "Question {}", n),
        }
    }
}
