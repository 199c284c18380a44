// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::SignedDuration;
use jiff::civil::{Date, DateTime, Time};

/// NOTE: Used for display and CLI input, so it should be stable across different runs.
pub const STABLE_FORMAT_DATE: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_TIME: &str = "%H:%M";
pub const STABLE_FORMAT_DATETIME: &str = "%Y-%m-%d %H:%M";

/// The calendar day an event starting at `start` is bucketed under.
///
/// All date-times in this crate are civil values in the device's local zone, so
/// the day-key is just the date component.
pub fn day_key(start: &DateTime) -> Date {
    start.date()
}

/// The current civil date-time in the system time zone, truncated to the minute.
pub fn now() -> DateTime {
    truncate_to_minute(jiff::Zoned::now().datetime())
}

pub fn truncate_to_minute(dt: DateTime) -> DateTime {
    dt.date().at(dt.hour(), dt.minute(), 0, 0)
}

/// Formats a time range like `08:00 - 10:00`. The end date is spelled out when
/// the range crosses midnight.
pub fn format_time_range(start: &DateTime, end: &DateTime) -> String {
    let end = if start.date() == end.date() {
        end.strftime(STABLE_FORMAT_TIME).to_string()
    } else {
        end.strftime(STABLE_FORMAT_DATETIME).to_string()
    };
    format!("{} - {}", start.strftime(STABLE_FORMAT_TIME), end)
}

pub fn parse_date(s: &str) -> Result<Date, Box<dyn Error>> {
    Date::strptime(STABLE_FORMAT_DATE, s.trim())
        .map_err(|e| format!("Invalid date '{s}', expected YYYY-MM-DD: {e}").into())
}

pub fn parse_time(s: &str) -> Result<Time, Box<dyn Error>> {
    Time::strptime(STABLE_FORMAT_TIME, s.trim())
        .map_err(|e| format!("Invalid time '{s}', expected HH:MM: {e}").into())
}

/// Parses `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`.
pub fn parse_datetime(s: &str) -> Result<DateTime, Box<dyn Error>> {
    let s = s.trim();
    let (date, time) = s
        .split_once(' ')
        .or_else(|| s.split_once('T'))
        .ok_or_else(|| format!("Invalid date-time '{s}', expected YYYY-MM-DD HH:MM"))?;

    Ok(parse_date(date)?.to_datetime(parse_time(time)?))
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
///
/// Values that do not fit in an `i64` number of seconds are rejected.
pub fn parse_duration(s: &str) -> Result<SignedDuration, Box<dyn Error>> {
    let overflow = || format!("Duration out of range: {s}");

    // Try to parse "HH:MM" format
    let seconds = if let Some((h, m)) = s.split_once(':') {
        let hours: i64 = h.trim().parse()?;
        let minutes: i64 = m.trim().parse()?;
        hours
            .checked_mul(60)
            .and_then(|a| a.checked_add(minutes))
            .and_then(|a| a.checked_mul(60))
            .ok_or_else(overflow)?
    }
    // Match suffix-based formats
    else if let Some(rest) = s.strip_suffix("d") {
        let days: i64 = rest.trim().parse()?;
        days.checked_mul(24 * 60 * 60).ok_or_else(overflow)?
    } else if let Some(rest) = s.strip_suffix("h") {
        let hours: i64 = rest.trim().parse()?;
        hours.checked_mul(60 * 60).ok_or_else(overflow)?
    } else if let Some(rest) = s.strip_suffix("m") {
        let minutes: i64 = rest.trim().parse()?;
        minutes.checked_mul(60).ok_or_else(overflow)?
    } else if let Some(rest) = s.strip_suffix("s") {
        rest.trim().parse()?
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };
    Ok(SignedDuration::from_secs(seconds))
}
