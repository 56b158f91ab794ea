use crate::core::axis::AxisTable;
use crate::core::calculator::elapsed::{elapsed, ensure_ordered};
use crate::core::calculator::expected::per_day_required_minutes;
use crate::core::calculator::surplus::signed_overtime;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::derived_day::{DayStatus, DerivedDayRecord};
use crate::utils::time::{format_minutes, format_signed_minutes};
use tracing::debug;

/// Derive the chart and overtime view of a single day.
///
/// A `00:00`/`00:00` record becomes an off day with every offset at zero.
/// Any other record must have `leaving >= arrival`.
pub fn normalize(record: &DayRecord, axis: &AxisTable) -> AppResult<DerivedDayRecord> {
    let is_weekend = record.date.is_weekend();

    if record.is_no_data() {
        debug!(date = %record.date, is_weekend, "off day");
        return Ok(DerivedDayRecord {
            date: record.date,
            status: DayStatus::NoData,
            is_weekend,
            from_offset: 0,
            to_offset: 0,
            break_offset: 0,
            signed_overtime_minutes: 0,
            from_label: "00:00".to_string(),
            to_label: "00:00".to_string(),
            worked_label: "00:00".to_string(),
            overtime_label: "00:00".to_string(),
        });
    }

    ensure_ordered(record.arrival, record.leaving)?;

    let worked = elapsed(record.arrival, record.leaving);
    let required = per_day_required_minutes(record.break_time);
    let overtime = signed_overtime(worked, required);

    debug!(
        date = %record.date,
        worked,
        required,
        overtime,
        "day normalized"
    );

    Ok(DerivedDayRecord {
        date: record.date,
        status: DayStatus::Worked {
            worked_minutes: worked,
            break_minutes: record.break_time.minutes(),
            overtime_minutes: overtime,
        },
        is_weekend,
        from_offset: axis.time_offset(record.arrival),
        to_offset: axis.time_offset(record.leaving),
        break_offset: axis.break_offset(record.break_time),
        signed_overtime_minutes: overtime,
        from_label: record.arrival.to_string(),
        to_label: record.leaving.to_string(),
        worked_label: format_minutes(worked),
        overtime_label: format_signed_minutes(overtime),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::day_record::StoredRecord;

    fn record(date: &str, from: &str, to: &str, brk: &str) -> DayRecord {
        StoredRecord {
            date: date.into(),
            from: from.into(),
            to: to.into(),
            break_time: brk.into(),
        }
        .parse()
        .unwrap()
    }

    #[test]
    fn sentinel_becomes_off_day() {
        let axis = AxisTable::build();
        let d = normalize(&record("2020.03.08.", "00:00", "00:00", "00:00"), &axis).unwrap();
        assert!(d.is_off_day());
        assert_eq!((d.from_offset, d.to_offset, d.break_offset), (0, 0, 0));
        assert_eq!(d.overtime_label, "00:00");
        assert_eq!(d.worked_minutes(), 0);
        assert_eq!(d.signed_overtime_minutes, 0);
    }

    #[test]
    fn exact_eight_hours_with_break() {
        let axis = AxisTable::build();
        let d = normalize(&record("2020.03.09.", "09:00", "17:20", "00:20"), &axis).unwrap();
        assert!(!d.is_off_day());
        assert_eq!(d.worked_minutes(), 500);
        assert_eq!(d.signed_overtime_minutes, 0);
        assert_eq!(d.overtime_label, "+00:00");
        assert_eq!(d.from_offset, 540);
        assert_eq!(d.to_offset, 1040);
        assert_eq!(d.break_offset, 20);
        assert_eq!(d.worked_label, "08:20");
    }

    #[test]
    fn deficit_day() {
        let axis = AxisTable::build();
        let d = normalize(&record("2020.03.10.", "09:30", "17:10", "00:00"), &axis).unwrap();
        assert_eq!(d.worked_minutes(), 460);
        assert_eq!(d.signed_overtime_minutes, -20);
        assert_eq!(d.overtime_label, "-00:20");
        assert_eq!(d.from_label, "09:30");
        assert_eq!(d.to_label, "17:10");
    }

    #[test]
    fn weekend_flag_ignores_content() {
        let axis = AxisTable::build();
        let off = normalize(&record("2020.03.07.", "00:00", "00:00", "00:00"), &axis).unwrap();
        let worked = normalize(&record("2020.03.07.", "10:00", "12:00", "00:00"), &axis).unwrap();
        assert!(off.is_weekend);
        assert!(worked.is_weekend);
        assert_eq!(worked.overtime_label, "-06:00");
    }

    #[test]
    fn reversed_record_is_rejected() {
        let axis = AxisTable::build();
        let err = normalize(&record("2020.03.10.", "17:00", "09:00", "00:00"), &axis).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimeRange { .. }));
    }

    #[test]
    fn offsets_stay_on_the_axis() {
        let axis = AxisTable::build();
        let d = normalize(&record("2020.03.10.", "00:01", "23:59", "23:59"), &axis).unwrap();
        assert!(d.from_offset <= 1439 && d.to_offset <= 1439 && d.break_offset <= 1439);
        // 1438 worked against 480 + 1439 required
        assert_eq!(d.overtime_label, "-08:01");
    }
}
