//! # contactbook
//!
//! A personal address book: contacts with birthdays, phones, emails, addresses
//! and tagged notes, stored in a single JSON file.
//!
//! The interesting part is [`birthdays`], which answers "whose birthday falls in
//! the next N days", across year boundaries and for Feb 29 birthdays.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use contactbook::birthdays::{ContactBirthday, find_upcoming};
//!
//! let today = NaiveDate::from_ymd_opt(2022, 12, 20).unwrap();
//! let contacts = [ContactBirthday::parse("Ann", "1990-01-05").unwrap()];
//! let found = find_upcoming(today, 20, &contacts);
//! assert_eq!(found[0].days_remaining, 16);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `birthdays` | Upcoming-birthday window queries |
//! | `calendar` | Leap years, month lengths, leap-day substitution |
//! | `contact` | Record model and persisted document |
//! | `book` | CRUD, paging and search over the records |
//! | `validate` | Form checks and their messages |
//! | `store` | JSON data file |
//! | `render` | Plain-text output |
//! | `error` | Error types |

pub mod birthdays;
pub mod book;
pub mod calendar;
pub mod contact;
pub mod error;
pub mod render;
pub mod store;
pub mod validate;

pub use birthdays::{BirthdayOccurrence, ContactBirthday, Window, find_upcoming};
pub use book::{AddressBook, NewRecord, Page, SearchMode};
pub use contact::{BookData, Record};
pub use error::BookError;
pub use store::JsonStore;
pub use validate::ValidationError;
