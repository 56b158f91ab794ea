use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use chrono::format::{Item, StrftimeItems};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Storage and axis format of a date: `2020.03.07.` (the trailing dot belongs to it).
pub const DATE_FORMAT: &str = "%Y.%m.%d.";

/// A calendar day, keyed and labelled as `YYYY.MM.DD.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Next calendar day, `None` only at the end of chrono's range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Saturday or Sunday. Depends on the date alone.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Render with a user supplied chrono pattern (graph settings).
    ///
    /// Unknown specifiers and time-of-day fields are a `Config` error.
    pub fn format_with(&self, pattern: &str) -> AppResult<String> {
        let invalid = || AppError::Config(format!("invalid date format '{}'", pattern));
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }
        let mut out = String::new();
        write!(out, "{}", self.0.format(pattern)).map_err(|_| invalid())?;
        Ok(out)
    }

    /// Number of dates in `[self, end]`, zero when `end` is earlier.
    pub fn days_until_inclusive(&self, end: &CalendarDate) -> usize {
        let span = (end.0 - self.0).num_days();
        if span < 0 { 0 } else { span as usize + 1 }
    }
}

impl FromStr for CalendarDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts "2020.3.7." too; the key format is strictly padded
        if s.len() != 11 {
            return Err(AppError::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(d: CalendarDate) -> Self {
        d.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
