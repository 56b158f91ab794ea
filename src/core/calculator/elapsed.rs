use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;

/// `end - start` in minutes, on the same day.
///
/// There is no rollover past midnight: an `end` before `start` gives a
/// negative value. Callers that need a real span check [`ensure_ordered`] first.
pub fn elapsed(start: TimeOfDay, end: TimeOfDay) -> i64 {
    end.minute_of_day() as i64 - start.minute_of_day() as i64
}

/// Reject a leaving time that precedes the arrival time.
pub fn ensure_ordered(arrival: TimeOfDay, leaving: TimeOfDay) -> AppResult<()> {
    if leaving < arrival {
        return Err(AppError::InvalidTimeRange {
            arrival: arrival.to_string(),
            leaving: leaving.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn elapsed_counts_minutes() {
        assert_eq!(elapsed(t("09:00"), t("17:20")), 500);
        assert_eq!(elapsed(t("09:30"), t("17:10")), 460);
        assert_eq!(elapsed(t("00:00"), t("00:00")), 0);
        assert_eq!(elapsed(t("00:00"), t("23:59")), 1439);
    }

    #[test]
    fn elapsed_does_not_roll_over() {
        assert_eq!(elapsed(t("22:00"), t("06:00")), -960);
    }

    #[test]
    fn reversed_times_are_an_invalid_range() {
        assert!(ensure_ordered(t("08:00"), t("08:00")).is_ok());
        assert!(ensure_ordered(t("08:00"), t("16:00")).is_ok());
        let err = ensure_ordered(t("16:00"), t("08:00")).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimeRange { .. }));
        assert_eq!(err.to_string(), "Leaving time 08:00 precedes arrival time 16:00");
    }
}
