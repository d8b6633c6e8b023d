//! In-memory address book over a [`BookData`] snapshot.
//!
//! The book is handed its data explicitly (usually by [`crate::store::JsonStore`])
//! and hands it back through [`AddressBook::into_data`] / [`AddressBook::data`]
//! for saving. All checks from [`crate::validate`] run here, so every caller
//! gets the same messages.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::birthdays::{self, BirthdayOccurrence, ContactBirthday};
use crate::contact::{Address, BookData, Email, Note, Phone, Record, Sequences, Tag};
use crate::error::BookError;
use crate::validate::{self, ValidationError};

/// Input for [`AddressBook::add_record`].
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub name: String,
    pub birthday: NaiveDate,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Whole name equals the query, ignoring case and surrounding spaces.
    #[default]
    Exact,
    /// Name contains the query, ignoring case.
    Contains,
}

/// One page of records.
#[derive(Debug)]
pub struct Page<'a> {
    pub items: &'a [Record],
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct AddressBook {
    data: BookData,
}

impl AddressBook {
    pub fn new(data: BookData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &BookData {
        &self.data
    }

    pub fn into_data(self) -> BookData {
        self.data
    }

    pub fn records(&self) -> &[Record] {
        &self.data.records
    }

    pub fn record(&self, id: u32) -> Result<&Record, BookError> {
        self.data
            .records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| BookError::not_found("record", id))
    }

    fn record_mut(&mut self, id: u32) -> Result<&mut Record, BookError> {
        self.data
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| BookError::not_found("record", id))
    }

    /// Names compare trimmed and case-insensitively.
    fn name_taken(&self, name: &str, except: Option<u32>) -> bool {
        let key = name_key(name);
        self.data
            .records
            .iter()
            .any(|r| name_key(&r.name) == key && Some(r.id) != except)
    }

    pub fn add_record(&mut self, new: NewRecord) -> Result<&Record, BookError> {
        validate::validate_required(&new.name)?;
        let name = validate::capitalize(new.name.trim());
        if self.name_taken(&name, None) {
            return Err(ValidationError::NameTaken.into());
        }
        validate::validate_phone(&new.phone)?;
        validate::validate_email(&new.email)?;

        let seq = &mut self.data.sequences;
        let record = Record {
            id: Sequences::next(&mut seq.record),
            name,
            birthday: new.birthday,
            phones: vec![Phone {
                id: Sequences::next(&mut seq.phone),
                number: new.phone,
            }],
            emails: vec![Email {
                id: Sequences::next(&mut seq.email),
                title: new.email,
            }],
            addresses: non_empty(new.address)
                .map(|title| Address {
                    id: Sequences::next(&mut seq.address),
                    title,
                })
                .into_iter()
                .collect(),
            notes: non_empty(new.note)
                .map(|title| Note {
                    id: Sequences::next(&mut seq.note),
                    title,
                    tags: Vec::new(),
                })
                .into_iter()
                .collect(),
        };
        info!(id = record.id, name = %record.name, "record added");
        self.data.records.push(record);
        let idx = self.data.records.len() - 1;
        Ok(&self.data.records[idx])
    }

    /// Records on 1-based page `page`, `per_page` at a time.
    pub fn page(&self, page: usize, per_page: usize) -> Result<Page<'_>, BookError> {
        let per_page = per_page.max(1);
        let total = self.data.records.len();
        let pages = total.div_ceil(per_page).max(1);
        if page == 0 || page > pages {
            return Err(BookError::PageOutOfRange { page, pages });
        }
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total);
        Ok(Page {
            items: &self.data.records[start..end],
            page,
            pages,
            total,
        })
    }

    pub fn search(&self, query: &str, mode: SearchMode) -> Result<Vec<&Record>, BookError> {
        let query = validate::validate_search(query)?;
        let found: Vec<&Record> = match mode {
            SearchMode::Exact => {
                let wanted = name_key(query);
                self.data
                    .records
                    .iter()
                    .filter(|r| name_key(&r.name) == wanted)
                    .collect()
            }
            SearchMode::Contains => {
                let wanted = query.to_lowercase();
                self.data
                    .records
                    .iter()
                    .filter(|r| r.name.to_lowercase().contains(&wanted))
                    .collect()
            }
        };
        debug!(query, ?mode, hits = found.len(), "search");
        Ok(found)
    }

    pub fn edit_record(
        &mut self,
        id: u32,
        name: Option<String>,
        birthday: Option<NaiveDate>,
    ) -> Result<&Record, BookError> {
        self.record(id)?;
        let name = match name {
            Some(name) => {
                validate::validate_required(&name)?;
                let name = validate::capitalize(name.trim());
                if self.name_taken(&name, Some(id)) {
                    return Err(ValidationError::NameTaken.into());
                }
                Some(name)
            }
            None => None,
        };
        let record = self.record_mut(id)?;
        if let Some(name) = name {
            record.name = name;
        }
        if let Some(birthday) = birthday {
            record.birthday = birthday;
        }
        info!(id, "record edited");
        Ok(&*record)
    }

    pub fn edit_phone(&mut self, phone_id: u32, number: &str) -> Result<(), BookError> {
        validate::validate_phone(number)?;
        let phone = self
            .data
            .records
            .iter_mut()
            .flat_map(|r| r.phones.iter_mut())
            .find(|p| p.id == phone_id)
            .ok_or_else(|| BookError::not_found("phone", phone_id))?;
        phone.number = number.to_string();
        info!(phone_id, "phone edited");
        Ok(())
    }

    pub fn edit_email(&mut self, email_id: u32, title: &str) -> Result<(), BookError> {
        validate::validate_email(title)?;
        let email = self
            .data
            .records
            .iter_mut()
            .flat_map(|r| r.emails.iter_mut())
            .find(|e| e.id == email_id)
            .ok_or_else(|| BookError::not_found("email", email_id))?;
        email.title = title.to_string();
        info!(email_id, "email edited");
        Ok(())
    }

    pub fn edit_address(&mut self, address_id: u32, title: &str) -> Result<(), BookError> {
        let address = self
            .data
            .records
            .iter_mut()
            .flat_map(|r| r.addresses.iter_mut())
            .find(|a| a.id == address_id)
            .ok_or_else(|| BookError::not_found("address", address_id))?;
        address.title = title.to_string();
        info!(address_id, "address edited");
        Ok(())
    }

    fn note_mut(&mut self, note_id: u32) -> Result<&mut Note, BookError> {
        self.data
            .records
            .iter_mut()
            .flat_map(|r| r.notes.iter_mut())
            .find(|n| n.id == note_id)
            .ok_or_else(|| BookError::not_found("note", note_id))
    }

    pub fn edit_note(&mut self, note_id: u32, title: &str) -> Result<(), BookError> {
        self.note_mut(note_id)?.title = title.to_string();
        info!(note_id, "note edited");
        Ok(())
    }

    pub fn add_tag(&mut self, note_id: u32, title: &str) -> Result<u32, BookError> {
        validate::validate_required(title)?;
        self.note_mut(note_id)?;
        let id = Sequences::next(&mut self.data.sequences.tag);
        self.note_mut(note_id)?.tags.push(Tag {
            id,
            title: title.to_string(),
        });
        info!(note_id, tag_id = id, "tag added");
        Ok(id)
    }

    pub fn edit_tag(&mut self, tag_id: u32, title: &str) -> Result<(), BookError> {
        validate::validate_required(title)?;
        let tag = self
            .data
            .records
            .iter_mut()
            .flat_map(|r| r.notes.iter_mut())
            .flat_map(|n| n.tags.iter_mut())
            .find(|t| t.id == tag_id)
            .ok_or_else(|| BookError::not_found("tag", tag_id))?;
        tag.title = title.to_string();
        info!(tag_id, "tag edited");
        Ok(())
    }

    /// Removes the record together with its phones, emails, addresses, notes and tags.
    pub fn delete_record(&mut self, id: u32) -> Result<Record, BookError> {
        let idx = self
            .data
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| BookError::not_found("record", id))?;
        let record = self.data.records.remove(idx);
        info!(id, name = %record.name, "record deleted");
        Ok(record)
    }

    /// Every stored birthday, in insertion order.
    pub fn birthday_entries(&self) -> Vec<ContactBirthday> {
        self.data
            .records
            .iter()
            .map(Record::birthday_entry)
            .collect()
    }

    pub fn upcoming_birthdays(&self, anchor: NaiveDate, window_days: u64) -> Vec<BirthdayOccurrence> {
        let found = birthdays::find_upcoming(anchor, window_days, &self.birthday_entries());
        debug!(%anchor, window_days, hits = found.len(), "upcoming birthdays");
        found
    }

    /// Validates a user-typed period, then runs [`Self::upcoming_birthdays`].
    pub fn holidays_period(
        &self,
        anchor: NaiveDate,
        period: &str,
        max_period: u64,
    ) -> Result<Vec<BirthdayOccurrence>, BookError> {
        let days = validate::parse_period(period.trim(), max_period)?;
        Ok(self.upcoming_birthdays(anchor, days))
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
