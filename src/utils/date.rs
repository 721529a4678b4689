use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Monday-first abbreviations used by the calendar header.
pub const WEEKDAY_ABBREVS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse `MM/YY` or `MM/YYYY` into the first day of that month.
/// Two-digit years are taken as 20YY.
pub fn parse_month_year(s: &str) -> AppResult<NaiveDate> {
    let invalid = || AppError::InvalidMonth(s.to_string());

    let (m, y) = s.trim().split_once('/').ok_or_else(invalid)?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let mut year: i32 = y.parse().map_err(|_| invalid())?;
    if year < 100 {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// English month name for 1..=12, empty for anything else.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}
