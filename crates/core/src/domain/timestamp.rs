// Run Timestamp (compact `YYYYMMDDTHHMMSS`)

use crate::domain::error::{DomainError, Result};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Wall-clock time a result or log file was produced.
///
/// Serialized in the compact form used in file names (`20250302T101520`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RunTimestamp(NaiveDateTime);

impl RunTimestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parse the compact form. Only exactly 8 digits, `T`, 6 digits is accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 15
            && bytes[8] == b'T'
            && bytes[..8].iter().all(u8::is_ascii_digit)
            && bytes[9..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(DomainError::InvalidTimestamp(s.to_string()));
        }

        NaiveDateTime::parse_from_str(s, COMPACT_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimestamp(s.to_string()))
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// `DD-MM-YYYY h:MMam` with a 12-hour clock
    pub fn display_label(&self) -> String {
        let hour = self.0.hour();
        let suffix = if hour >= 12 { "pm" } else { "am" };
        let twelve_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!(
            "{} {}:{:02}{}",
            self.0.format("%d-%m-%Y"),
            twelve_hour,
            self.0.minute(),
            suffix
        )
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(COMPACT_FORMAT))
    }
}

impl FromStr for RunTimestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RunTimestamp {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<RunTimestamp> for String {
    fn from(value: RunTimestamp) -> Self {
        value.to_string()
    }
}
