use super::{break_duration::BreakDuration, calendar_date::CalendarDate, time_of_day::TimeOfDay};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

fn default_break() -> String {
    "00:00".to_string()
}

/// One entry of the record store file, kept as written.
///
/// `break` is absent in files written before breaks were tracked and then
/// reads as `00:00`. Times stay textual here so a single malformed entry
/// does not prevent the rest of the file from loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub date: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "break", default = "default_break")]
    pub break_time: String,
}

impl StoredRecord {
    /// The "no data" entry for a date.
    pub fn sentinel(date: &CalendarDate) -> Self {
        Self {
            date: date.to_string(),
            from: "00:00".to_string(),
            to: "00:00".to_string(),
            break_time: default_break(),
        }
    }

    /// Parse the textual times. Non-canonical values raise `UnknownTime`.
    pub fn parse(&self) -> AppResult<DayRecord> {
        Ok(DayRecord {
            date: self.date.parse()?,
            arrival: self.from.parse()?,
            leaving: self.to.parse()?,
            break_time: self.break_time.parse()?,
        })
    }
}

impl From<&DayRecord> for StoredRecord {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.date.to_string(),
            from: r.arrival.to_string(),
            to: r.leaving.to_string(),
            break_time: r.break_time.to_string(),
        }
    }
}

/// A typed day entry: arrival, leaving and the break taken in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: CalendarDate,
    pub arrival: TimeOfDay,
    pub leaving: TimeOfDay,
    pub break_time: BreakDuration,
}

impl DayRecord {
    pub fn sentinel(date: CalendarDate) -> Self {
        Self {
            date,
            arrival: TimeOfDay::MIDNIGHT,
            leaving: TimeOfDay::MIDNIGHT,
            break_time: BreakDuration::ZERO,
        }
    }

    /// `00:00`/`00:00` marks a date without recorded times.
    pub fn is_no_data(&self) -> bool {
        self.arrival == TimeOfDay::MIDNIGHT && self.leaving == TimeOfDay::MIDNIGHT
    }
}
