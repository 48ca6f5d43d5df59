//! Date/time helpers: parsing CLI input and the single timestamp format
//! used by every backend.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Stored timestamp format. Fixed width, so string order is time order.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S";
pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIME_FMT: &str = "%H:%M";

/// Longest duration accepted for an event or a slot check: one week.
pub const MAX_EVENT_MINUTES: i64 = 7 * 24 * 60;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FMT).ok()
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn require_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` time from the command line.
pub fn combine(date: &str, time: &str) -> AppResult<NaiveDateTime> {
    Ok(require_date(date)?.and_time(require_time(time)?))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// Parse a stored timestamp. Older data may carry fractional seconds or a
/// space separator, both are accepted.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    // browser ISO strings carry a UTC marker; stored values are naive
    let s = s.trim().trim_end_matches('Z');
    let ts = NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;
    // in memory a timestamp is exactly what TIMESTAMP_FMT can write back
    Ok(ts.with_nanosecond(0).unwrap_or(ts))
}

/// `ts` shifted by `minutes`; out-of-range results are a validation error.
pub fn plus_minutes(ts: NaiveDateTime, minutes: i64) -> AppResult<NaiveDateTime> {
    TimeDelta::try_minutes(minutes)
        .and_then(|d| ts.checked_add_signed(d))
        .ok_or_else(|| {
            AppError::Validation(format!("{} minutes after {} is out of range.", minutes, ts))
        })
}

/// First instant of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// First instant after `date` ends.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + TimeDelta::days(1)
}

/// Human form used on the dashboard, e.g. "Monday, Jan 01 at 09:00 PM".
pub fn pretty(ts: &NaiveDateTime) -> String {
    ts.format("%A, %b %d at %I:%M %p").to_string()
}

/// Human form used for notes, e.g. "Jan 01, 2024 at 09:00 PM".
pub fn pretty_short(ts: &NaiveDateTime) -> String {
    ts.format("%b %d, %Y at %I:%M %p").to_string()
}
