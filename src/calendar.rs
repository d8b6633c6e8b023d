//! calendar.rs
//!
//! Gregorian helpers shared by the birthday computations.
//!
//! A birthday is a month/day pair that recurs every year, which breaks down for
//! Feb 29 in common years. The substitution rule lives here so every caller
//! applies it the same way:
//!   • Feb 29 in a leap year      → Feb 29
//!   • Feb 29 in a common year    → Mar 1
//!   • any other month/day        → unchanged

use chrono::{Datelike, NaiveDate};

use crate::error::BookError;

/// Returns the date on which `birthday` is celebrated in `year`.
///
/// `None` only when `year` is outside the range chrono can represent.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    let (month, day) = (birthday.month(), birthday.day());
    // Only Feb 29 can overflow its month; it moves to the 1st of the next one.
    if day > days_in_month(year, month)? {
        return NaiveDate::from_ymd_opt(year, month + 1, 1);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, BookError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| BookError::invalid_date(input))
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
