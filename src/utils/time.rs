//! Time utilities: parsing HH:MM, worked-minutes computation, formatting
//! signed minute balances.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Worked minutes for a single day.
///
/// Either endpoint missing means the day has no measurable span and yields 0.
/// The raw span is clamped to >= 0 before the break is subtracted, and the
/// result is clamped again: a negative span (end before start) never produces
/// negative worked time. Overnight shifts are not supported.
pub fn worked_minutes(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    break_minutes: i64,
) -> i64 {
    let (Some(s), Some(e)) = (start, end) else {
        return 0;
    };

    let raw = (minute_of_day(e) - minute_of_day(s)).max(0);
    (raw - break_minutes).max(0)
}

/// Render a signed minute count as `±H:MM`.
///
/// Hours are not zero-padded, minutes always are; the sign appears only for
/// negative values: `-90` → `"-1:30"`, `135` → `"2:15"`, `0` → `"0:00"`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

/// Inverse of [`format_minutes`]: parses `-1:30` back to `-90`.
pub fn parse_signed_minutes(s: &str) -> Option<i64> {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => (-1, r),
        None => (1, s),
    };

    let (h, m) = rest.split_once(':')?;
    let hours: i64 = h.parse().ok()?;
    let minutes: i64 = m.parse().ok()?;

    if m.len() != 2 || minutes >= 60 {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}
