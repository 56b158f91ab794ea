use crate::utils::time::format_minutes;
use serde::Serialize;

/// Aggregate figures over a date range. Every duration is in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeMetrics {
    pub all_days: usize,
    pub week_days: usize,
    pub weekend_days: usize,
    pub worked_days: usize,
    /// `all_days - weekend_days - worked_days`; negative when weekend work
    /// outnumbers the weekdays left empty.
    pub missing_days: i64,
    pub required_minutes: i64,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub overtime_plus_minutes: i64,
    pub overtime_minus_minutes: i64,
    pub overtime_overall_minutes: i64,
}

impl RangeMetrics {
    /// Label/value pairs in display order, durations as `HH:MM` or `-HH:MM`.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("All days", self.all_days.to_string()),
            ("Week days", self.week_days.to_string()),
            ("Weekend days", self.weekend_days.to_string()),
            ("Worked days", self.worked_days.to_string()),
            ("Missing days", self.missing_days.to_string()),
            ("Required working hours", format_minutes(self.required_minutes)),
            ("Worked hours", format_minutes(self.worked_minutes)),
            ("Break hours", format_minutes(self.break_minutes)),
            ("Overtime plus", format_minutes(self.overtime_plus_minutes)),
            ("Overtime minus", format_minutes(self.overtime_minus_minutes)),
            ("Overtime overall", format_minutes(self.overtime_overall_minutes)),
        ]
    }
}
