// Log File Entry (model-server run logs)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shown when a log file name carries no recognisable date
pub const UNKNOWN_DATE: &str = "Unknown Date";

// Accepts `_20250302T101520` and `_20250302_101520`
static LOG_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(\d{8})[T_](\d{6})").expect("log date pattern is valid"));

/// Row of the log file table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFileEntry {
    pub name: String,
    pub date: String,
}

impl LogFileEntry {
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let date = LOG_DATE_RE
            .captures(&name)
            .map(|caps| format!("{}T{}", &caps[1], &caps[2]))
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());
        Self { name, date }
    }
}
