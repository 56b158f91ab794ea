use crate::errors::AppError;
use crate::utils::time::parse_hhmm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the break taken during a day, written as `HH:MM`.
///
/// Shares the textual form of [`TimeOfDay`](super::time_of_day::TimeOfDay)
/// but is a span, not a clock reading; the two never convert into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BreakDuration {
    minutes: u16,
}

impl BreakDuration {
    pub const ZERO: BreakDuration = BreakDuration { minutes: 0 };

    /// Breaks are bounded to the 1440 slots of the axis table.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < 24 * 60).then_some(Self { minutes })
    }

    pub fn minutes(&self) -> i64 {
        self.minutes as i64
    }
}

impl FromStr for BreakDuration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = parse_hhmm(s).ok_or_else(|| AppError::UnknownTime(s.to_string()))?;
        Ok(Self {
            minutes: h as u16 * 60 + m as u16,
        })
    }
}

impl TryFrom<String> for BreakDuration {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BreakDuration> for String {
    fn from(d: BreakDuration) -> Self {
        d.to_string()
    }
}

impl fmt::Display for BreakDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}
