use super::calendar_date::CalendarDate;
use serde::Serialize;

/// Whether a day carries real arrival/leaving data.
///
/// Decided once by the normalizer; later stages match on it instead of
/// re-deriving absence from the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayStatus {
    Worked {
        worked_minutes: i64,
        break_minutes: i64,
        overtime_minutes: i64,
    },
    NoData,
}

/// Chart-ready view of one day. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedDayRecord {
    pub date: CalendarDate,
    pub status: DayStatus,
    pub is_weekend: bool,
    /// Axis offset of arrival, 0..=1439.
    pub from_offset: u16,
    /// Axis offset of leaving, 0..=1439.
    pub to_offset: u16,
    /// Break length looked up on the same axis, 0..=1439.
    pub break_offset: u16,
    pub signed_overtime_minutes: i64,
    pub from_label: String,
    pub to_label: String,
    pub worked_label: String,
    pub overtime_label: String,
}

impl DerivedDayRecord {
    pub fn is_off_day(&self) -> bool {
        matches!(self.status, DayStatus::NoData)
    }

    /// `leaving - arrival`, zero for off days.
    pub fn worked_minutes(&self) -> i64 {
        match self.status {
            DayStatus::Worked { worked_minutes, .. } => worked_minutes,
            DayStatus::NoData => 0,
        }
    }

    pub fn break_minutes(&self) -> i64 {
        match self.status {
            DayStatus::Worked { break_minutes, .. } => break_minutes,
            DayStatus::NoData => 0,
        }
    }
}
