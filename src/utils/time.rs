//! Time utilities: duration formatting, goal parsing, timestamp text conversion.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Storage format for record timestamps (local time, lexically sortable).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Human format used in command output.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub const SECS_PER_HOUR: i64 = 3600;

/// Upper bound for a daily goal.
pub const MAX_GOAL_SECS: i64 = 24 * SECS_PER_HOUR;

/// `HH:MM:SS`, zero padded. Hours are not capped at 99.
/// Negative inputs are clamped to zero; use `format_signed_duration` for balances.
pub fn format_duration(seconds: i64) -> String {
    let s = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        s / SECS_PER_HOUR,
        (s % SECS_PER_HOUR) / 60,
        s % 60
    )
}

/// `HH:MM` for calendar cells.
pub fn format_hm(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}", s / SECS_PER_HOUR, (s % SECS_PER_HOUR) / 60)
}

/// Like `format_duration` but keeps the sign: `-01:30:00`.
pub fn format_signed_duration(seconds: i64) -> String {
    if seconds < 0 {
        format!("-{}", format_duration(-seconds))
    } else {
        format_duration(seconds)
    }
}

pub fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 / SECS_PER_HOUR as f64
}

/// Parse a goal such as `8h`, `7h30m`, `450m` or a bare number of hours (`7.5`)
/// into seconds. Goals above 24 hours are rejected.
pub fn parse_goal(input: &str) -> AppResult<i64> {
    let raw = input.trim().to_ascii_lowercase();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }

    if let Ok(hours) = raw.parse::<f64>() {
        if !(0.0..=24.0).contains(&hours) {
            return Err(invalid());
        }
        return Ok((hours * SECS_PER_HOUR as f64).round() as i64);
    }

    let (hours_part, rest) = match raw.split_once('h') {
        Some((h, rest)) => (Some(h), rest),
        None => (None, raw.as_str()),
    };

    let hours: i64 = match hours_part {
        Some(h) => h.parse().map_err(|_| invalid())?,
        None => 0,
    };

    let minutes: i64 = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?
    };

    if hours < 0 || minutes < 0 {
        return Err(invalid());
    }

    let total = hours
        .checked_mul(SECS_PER_HOUR)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .ok_or_else(invalid)?;

    if total > MAX_GOAL_SECS {
        return Err(invalid());
    }
    Ok(total)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp. Accepts the storage format and the ISO variants
/// with fractional seconds or a space separator.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    const ACCEPTED: [&str; 4] = [
        TIMESTAMP_FORMAT,
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    ACCEPTED
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Whole seconds elapsed between two timestamps, never negative.
pub fn elapsed_seconds(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    (*end - *start).num_seconds().max(0)
}
