use crate::core::calculator::elapsed::ensure_ordered;
use crate::errors::{AppError, AppResult};
use crate::models::break_duration::BreakDuration;
use crate::models::calendar_date::CalendarDate;
use crate::models::day_record::DayRecord;
use crate::models::time_of_day::TimeOfDay;
use crate::store::RecordStore;
use tracing::info;

/// High-level business logic for the `add` command.
pub struct AddLogic;

fn parse_time(field: &str, value: &str) -> AppResult<TimeOfDay> {
    value
        .parse()
        .map_err(|_| AppError::InvalidTime(format!("{} '{}', expected HH:MM", field, value)))
}

impl AddLogic {
    /// Validate user input into a record. A reversed pair is refused.
    pub fn build(
        date: CalendarDate,
        arrival: &str,
        leaving: &str,
        break_time: Option<&str>,
    ) -> AppResult<DayRecord> {
        let arrival = parse_time("arrival", arrival)?;
        let leaving = parse_time("leaving", leaving)?;
        let break_time = match break_time {
            Some(b) => b.parse::<BreakDuration>().map_err(|_| {
                AppError::InvalidTime(format!("break '{}', expected HH:MM", b))
            })?,
            None => BreakDuration::ZERO,
        };

        ensure_ordered(arrival, leaving)?;

        Ok(DayRecord {
            date,
            arrival,
            leaving,
            break_time,
        })
    }

    /// Validate and replace-or-append. Nothing is written on error.
    pub fn apply(
        store: &mut impl RecordStore,
        date: CalendarDate,
        arrival: &str,
        leaving: &str,
        break_time: Option<&str>,
    ) -> AppResult<DayRecord> {
        let record = Self::build(date, arrival, leaving, break_time)?;
        store.set(&record)?;
        info!(date = %record.date, "record saved");
        Ok(record)
    }
}
