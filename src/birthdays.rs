//! birthdays.rs
//!
//! Upcoming-birthday queries: which contacts have a birthday inside the
//! inclusive window `[anchor, anchor + window_days]`.
//!
//! The next occurrence of a birthday is its month/day in the anchor's year, or
//! in the following year when that date has already passed. Leap-day birthdays
//! follow the substitution in [`crate::calendar::occurrence_in_year`].

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use crate::calendar;
use crate::error::BookError;

/// A contact's name and registered birthday, as read for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBirthday {
    pub name: String,
    pub birthday: NaiveDate,
}

impl ContactBirthday {
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthday,
        }
    }

    /// Builds from raw year/month/day, rejecting non-calendar dates.
    pub fn from_ymd(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self, BookError> {
        let birthday = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| BookError::invalid_date(format!("{year:04}-{month:02}-{day:02}")))?;
        Ok(Self::new(name, birthday))
    }

    /// Builds from an ISO `YYYY-MM-DD` birthday.
    pub fn parse(name: impl Into<String>, birthday: &str) -> Result<Self, BookError> {
        Ok(Self::new(name, calendar::parse_iso_date(birthday)?))
    }
}

/// A birthday that falls inside a query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayOccurrence {
    pub name: String,
    pub birthday: NaiveDate,
    pub next_occurrence: NaiveDate,
    pub days_remaining: i64,
}

impl fmt::Display for BirthdayOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} days left till next birthday",
            self.name,
            self.birthday.format("%Y-%m-%d"),
            self.days_remaining
        )
    }
}

/// The inclusive date range `[anchor, anchor + days]`.
///
/// Callers cap `days` at 365 before building a window; nothing here relies on
/// that cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    anchor: NaiveDate,
    days: u64,
}

impl Window {
    pub fn new(anchor: NaiveDate, days: u64) -> Self {
        Self { anchor, days }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32, days: u64) -> Result<Self, BookError> {
        let anchor = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| BookError::invalid_date(format!("{year:04}-{month:02}-{day:02}")))?;
        Ok(Self::new(anchor, days))
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    /// Last day of the window. Saturates at the latest representable date.
    pub fn end(&self) -> NaiveDate {
        self.anchor
            .checked_add_days(Days::new(self.days))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns whether `date` lies inside the window, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.anchor <= date && date <= self.end()
    }

    /// Contacts whose next birthday falls inside the window, in input order.
    pub fn find_upcoming(&self, contacts: &[ContactBirthday]) -> Vec<BirthdayOccurrence> {
        let end = self.end();
        contacts
            .iter()
            .filter_map(|contact| {
                let next = next_occurrence(contact.birthday, self.anchor)?;
                if next > end {
                    return None;
                }
                Some(BirthdayOccurrence {
                    name: contact.name.clone(),
                    birthday: contact.birthday,
                    next_occurrence: next,
                    days_remaining: (next - self.anchor).num_days(),
                })
            })
            .collect()
    }
}

/// Contacts whose next birthday is at most `window_days` days after `anchor`.
pub fn find_upcoming(
    anchor: NaiveDate,
    window_days: u64,
    contacts: &[ContactBirthday],
) -> Vec<BirthdayOccurrence> {
    Window::new(anchor, window_days).find_upcoming(contacts)
}

/// The first celebration of `birthday` on or after `anchor`.
///
/// Returns `None` when that date is past the end of chrono's range.
pub fn next_occurrence(birthday: NaiveDate, anchor: NaiveDate) -> Option<NaiveDate> {
    let this_year = calendar::occurrence_in_year(birthday, anchor.year())?;
    if this_year >= anchor {
        return Some(this_year);
    }
    calendar::occurrence_in_year(birthday, anchor.year().checked_add(1)?)
}

/// Days from `today` until the next celebration of `birthday`.
pub fn days_to_birthday(birthday: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_occurrence(birthday, today).map(|next| (next - today).num_days())
}
