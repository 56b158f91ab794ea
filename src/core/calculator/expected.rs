use crate::models::break_duration::BreakDuration;

/// Effective work a weekday asks for, in minutes.
pub const DAILY_WORK_MINUTES: i64 = 8 * 60;

/// Required span between arrival and leaving for one day.
///
/// The break extends the span without counting as work, so it is added on
/// top of the eight hours.
pub fn per_day_required_minutes(break_time: BreakDuration) -> i64 {
    DAILY_WORK_MINUTES + break_time.minutes()
}

/// Required hours of a whole range: a flat eight hours per weekday.
///
/// Breaks are not considered here, unlike [`per_day_required_minutes`].
pub fn range_required_minutes(week_days: usize) -> i64 {
    week_days as i64 * DAILY_WORK_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_day_policy_adds_the_break() {
        assert_eq!(per_day_required_minutes(BreakDuration::ZERO), 480);
        assert_eq!(per_day_required_minutes("00:20".parse().unwrap()), 500);
        assert_eq!(per_day_required_minutes("01:00".parse().unwrap()), 540);
    }

    #[test]
    fn range_policy_ignores_breaks() {
        assert_eq!(range_required_minutes(0), 0);
        assert_eq!(range_required_minutes(1), 480);
        assert_eq!(range_required_minutes(22), 10560);
    }
}
