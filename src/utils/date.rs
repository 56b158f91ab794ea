use crate::errors::{AppError, AppResult};
use crate::models::calendar_date::CalendarDate;
use chrono::{Datelike, Duration, NaiveDate};

/// Days before today covered by a range query without explicit bounds.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

pub fn today() -> CalendarDate {
    CalendarDate::new(chrono::Local::now().date_naive())
}

/// Accepts `YYYY.MM.DD.`, `YYYY-MM-DD` or `today`.
pub fn parse_flexible_date(s: &str) -> AppResult<CalendarDate> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(CalendarDate::new(d));
    }
    s.parse::<CalendarDate>()
}

/// Resolve a period into its first and last date.
///
/// `YYYY-MM-DD` (or any single-date form) is one day, `YYYY-MM` a month,
/// `YYYY` a year.
pub fn period_bounds(p: &str) -> AppResult<(CalendarDate, CalendarDate)> {
    if let Ok(d) = parse_flexible_date(p) {
        return Ok((d, d));
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p.trim()), "%Y-%m-%d") {
        let next = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        let last = next
            .and_then(|n| n.pred_opt())
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        return Ok((CalendarDate::new(first), CalendarDate::new(last)));
    }

    if let Ok(year) = p.trim().parse::<i32>() {
        let first = NaiveDate::from_ymd_opt(year, 1, 1);
        let last = NaiveDate::from_ymd_opt(year, 12, 31);
        if let (Some(f), Some(l)) = (first, last) {
            return Ok((CalendarDate::new(f), CalendarDate::new(l)));
        }
    }

    Err(AppError::InvalidDate(format!("Invalid period: {}", p)))
}

/// Every date of `[start, end]` in ascending order; empty when `end < start`.
pub fn generate_range(start: &CalendarDate, end: &CalendarDate) -> Vec<CalendarDate> {
    let mut out = Vec::with_capacity(start.days_until_inclusive(end));
    let mut d = *start;

    while d <= *end {
        out.push(d);
        match d.succ() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// `today - 30 ..= today`, the range used when none is given.
pub fn default_range() -> (CalendarDate, CalendarDate) {
    let end = today();
    let start = CalendarDate::new(end.naive() - Duration::days(DEFAULT_LOOKBACK_DAYS));
    (start, end)
}

/// Resolve the optional `--from`/`--to`/`--period` trio of a range command.
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    period: Option<&str>,
) -> AppResult<(CalendarDate, CalendarDate)> {
    if let Some(p) = period {
        return period_bounds(p);
    }

    let (default_start, default_end) = default_range();
    let start = match from {
        Some(s) => parse_flexible_date(s)?,
        None => default_start,
    };
    let end = match to {
        Some(s) => parse_flexible_date(s)?,
        None => default_end,
    };
    Ok((start, end))
}
