//! Contact records and the document they are persisted in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::birthdays::ContactBirthday;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub birthday: NaiveDate,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Record {
    pub fn birthday_entry(&self) -> ContactBirthday {
        ContactBirthday::new(self.name.clone(), self.birthday)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub id: u32,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub title: String,
}

/// Last id handed out per entity kind. Ids are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    pub record: u32,
    pub phone: u32,
    pub email: u32,
    pub address: u32,
    pub note: u32,
    pub tag: u32,
}

impl Sequences {
    pub(crate) fn next(counter: &mut u32) -> u32 {
        *counter = counter.saturating_add(1);
        *counter
    }
}

/// Everything stored in the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookData {
    #[serde(default)]
    pub sequences: Sequences,
    #[serde(default)]
    pub records: Vec<Record>,
}
