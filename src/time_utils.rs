// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for parsing dates, durations and numeric cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Date-only layouts seen in activity exports.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Date-time layouts; the time of day is discarded.
const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a `Date` cell into a calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a strict `YYYY-MM-DD` date, as accepted from API query parameters.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse a numeric cell. Thousands separators are accepted; placeholders
/// such as `--`, negatives and non-finite values yield `None`.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse a moving time into seconds.
///
/// Accepts `HH:MM:SS`, `HH:MM:SS.fff`, `MM:SS` and `D days HH:MM:SS`.
/// Hours are unbounded; minutes and seconds must be below 60.
pub fn parse_moving_time(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (days, clock) = match raw.split_once("day") {
        Some((days, rest)) => {
            let days: u32 = days.trim().parse().ok()?;
            let rest = rest.trim_start_matches('s').trim();
            (days, rest)
        }
        None => (0, raw),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (parse_hours(h)?, parse_sexagesimal(m)?, parse_seconds(s)?),
        [m, s] if days == 0 => (0, parse_sexagesimal(m)?, parse_seconds(s)?),
        _ => return None,
    };

    let whole = u64::from(days) * 86_400 + u64::from(hours) * 3600 + u64::from(minutes) * 60;
    Some(whole as f64 + seconds)
}

fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

fn parse_hours(raw: &str) -> Option<u32> {
    if !is_digits(raw) {
        return None;
    }
    raw.parse().ok()
}

fn parse_sexagesimal(raw: &str) -> Option<u32> {
    if !is_digits(raw) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|v| *v < 60)
}

fn parse_seconds(raw: &str) -> Option<f64> {
    let (whole, frac) = match raw.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (raw, None),
    };
    let whole = f64::from(parse_sexagesimal(whole)?);
    match frac {
        Some(frac) if is_digits(frac) => {
            let frac: f64 = format!("0.{}", frac).parse().ok()?;
            Some(whole + frac)
        }
        Some(_) => None,
        None => Some(whole),
    }
}
