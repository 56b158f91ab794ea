use crate::core::axis::AxisTable;
use crate::core::calculator::expected::range_required_minutes;
use crate::core::calculator::normalizer::normalize;
use crate::errors::{AppError, AppResult};
use crate::models::calendar_date::CalendarDate;
use crate::models::day_record::DayRecord;
use crate::models::derived_day::{DayStatus, DerivedDayRecord};
use crate::models::metrics::RangeMetrics;
use crate::store::RecordStore;
use crate::utils::date::generate_range;
use serde::Serialize;
use tracing::{debug, warn};

/// Largest range a chart or metrics request may cover.
pub const MAX_RANGE_DAYS: usize = 31;

/// A stored entry that could not be used and was treated as an off day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedDay {
    pub date: CalendarDate,
    pub reason: String,
}

/// Per-day series plus metrics for one date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    pub days: Vec<DerivedDayRecord>,
    pub metrics: RangeMetrics,
    pub flagged: Vec<FlaggedDay>,
}

/// Fail on reversed or oversized ranges; returns the number of dates.
pub fn check_range(start: &CalendarDate, end: &CalendarDate) -> AppResult<usize> {
    if end < start {
        return Err(AppError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let days = start.days_until_inclusive(end);
    if days > MAX_RANGE_DAYS {
        return Err(AppError::DateRangeTooLarge {
            days,
            max: MAX_RANGE_DAYS,
        });
    }
    Ok(days)
}

fn derive_day(
    store: &impl RecordStore,
    axis: &AxisTable,
    date: &CalendarDate,
) -> AppResult<DerivedDayRecord> {
    let record = store.get(date).parse()?;
    normalize(&record, axis)
}

/// Derive every date of `[start, end]` and accumulate the range metrics.
///
/// Absent dates count as off days. A stored entry with an unparsable or
/// reversed time is flagged and also treated as an off day.
pub fn aggregate(
    store: &impl RecordStore,
    axis: &AxisTable,
    start: &CalendarDate,
    end: &CalendarDate,
) -> AppResult<RangeReport> {
    let all_days = check_range(start, end)?;

    let mut days = Vec::with_capacity(all_days);
    let mut flagged = Vec::new();
    let mut m = RangeMetrics {
        all_days,
        ..RangeMetrics::default()
    };

    for date in generate_range(start, end) {
        let day = match derive_day(store, axis, &date) {
            Ok(day) => day,
            Err(e @ (AppError::UnknownTime(_) | AppError::InvalidTimeRange { .. })) => {
                warn!(date = %date, error = %e, "stored record ignored");
                flagged.push(FlaggedDay {
                    date,
                    reason: e.to_string(),
                });
                normalize(&DayRecord::sentinel(date), axis)?
            }
            Err(e) => return Err(e),
        };

        if day.is_weekend {
            m.weekend_days += 1;
        }

        if let DayStatus::Worked {
            worked_minutes,
            break_minutes,
            overtime_minutes,
        } = day.status
        {
            m.worked_days += 1;
            m.worked_minutes += worked_minutes;
            m.break_minutes += break_minutes;
            if overtime_minutes > 0 {
                m.overtime_plus_minutes += overtime_minutes;
            } else {
                m.overtime_minus_minutes += overtime_minutes;
            }
        }

        days.push(day);
    }

    m.week_days = m.all_days - m.weekend_days;
    m.missing_days = m.week_days as i64 - m.worked_days as i64;
    m.required_minutes = range_required_minutes(m.week_days);
    m.overtime_overall_minutes = m.overtime_plus_minutes + m.overtime_minus_minutes;

    debug!(
        start = %start,
        end = %end,
        worked_days = m.worked_days,
        overall = m.overtime_overall_minutes,
        "range aggregated"
    );

    Ok(RangeReport {
        days,
        metrics: m,
        flagged,
    })
}
