//! Time utilities: parsing HH:MM, formatting minutes, etc.

use regex::Regex;
use std::sync::LazyLock;

/// Canonical zero-padded `HH:MM`, 00:00 to 23:59.
static HHMM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("static HH:MM pattern")
});

/// Split a canonical `HH:MM` string into `(hour, minute)`.
///
/// Non-padded (`9:5`) or out of domain (`24:00`) input returns `None`.
pub fn parse_hhmm(t: &str) -> Option<(u8, u8)> {
    let caps = HHMM.captures(t)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    Some((hour, minute))
}

/// `125` → `02:05`, `-20` → `-00:20`. Zero and positive values carry no sign.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Overtime label form: always signed, zero counts as surplus (`+00:00`).
pub fn format_signed_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
