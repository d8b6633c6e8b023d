use chrono::NaiveDate;

use crate::birthdays::{self, BirthdayOccurrence};
use crate::book::Page;
use crate::contact::Record;

const MIN_ALIGN_CHARS: usize = 40;

pub const NO_BIRTHDAYS: &str = "No contacts with birthdays for this period.";
pub const NO_RESULTS: &str = "No contacts found.";
pub const CHANGES_SAVED: &str = "Your changes have been saved.";
pub const NO_CHANGES: &str = "Nothing to change.";
pub const TAG_SAVED: &str = "Record have been saved!";

pub fn record_saved(name: &str) -> String {
    format!("Record have been saved! {name}")
}

pub fn record_deleted(name: &str) -> String {
    format!("Your delete contact: {name}")
}

pub fn delete_prompt(name: &str) -> String {
    format!("Delete record: {name}?")
}

// Utilities for building aligned rows

pub fn build_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count());
    format!("{base}{}", "-".repeat(dash_count))
}

/// Key/value rows for one record, in display order.
fn record_rows(record: &Record, today: NaiveDate) -> Vec<(String, String)> {
    let mut rows = vec![(
        "Birthday".to_string(),
        record.birthday.format("%Y-%m-%d").to_string(),
    )];
    if let Some(days) = birthdays::days_to_birthday(record.birthday, today) {
        rows.push((
            "Next birthday".to_string(),
            format!("{days} days left till next birthday"),
        ));
    }
    for p in &record.phones {
        rows.push((format!("Phone #{}", p.id), p.number.clone()));
    }
    for e in &record.emails {
        rows.push((format!("Email #{}", e.id), e.title.clone()));
    }
    for a in &record.addresses {
        rows.push((format!("Address #{}", a.id), a.title.clone()));
    }
    for n in &record.notes {
        rows.push((format!("Note #{}", n.id), n.title.clone()));
        for t in &n.tags {
            rows.push((format!("  Tag #{}", t.id), t.title.clone()));
        }
    }
    rows
}

/// Multi-line card with every field of `record` and the id needed to edit it.
pub fn record_card(record: &Record, today: NaiveDate) -> String {
    let rows = record_rows(record, today);
    let align_width = rows
        .iter()
        .map(|(k, v)| k.chars().count() + 2 + v.chars().count() + 1)
        .max()
        .unwrap_or(0)
        .max(MIN_ALIGN_CHARS);

    let mut out = build_header_line(&format!("{} (#{})", record.name, record.id), align_width);
    for (k, v) in &rows {
        out.push('\n');
        out.push_str(&build_row(k, v, align_width));
    }
    out
}

fn cards<'a>(records: impl IntoIterator<Item = &'a Record>, today: NaiveDate) -> String {
    records
        .into_iter()
        .map(|r| record_card(r, today))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn page(page: &Page<'_>, today: NaiveDate) -> String {
    let footer = format!(
        "Page {} of {} ({} contacts)",
        page.page, page.pages, page.total
    );
    if page.items.is_empty() {
        return footer;
    }
    format!("{}\n\n{footer}", cards(page.items, today))
}

pub fn search_results(records: &[&Record], today: NaiveDate) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }
    cards(records.iter().copied(), today)
}

/// One line per occurrence, or [`NO_BIRTHDAYS`] when nothing matched.
pub fn birthdays(occurrences: &[BirthdayOccurrence]) -> String {
    if occurrences.is_empty() {
        return NO_BIRTHDAYS.to_string();
    }
    occurrences
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Note, Phone, Tag};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn row_is_padded_with_dots() {
        assert_eq!(build_row("Phone", "123", 20), "Phone: ......... 123");
        assert_eq!(build_row("Phone", "123", 12), "Phone: . 123");
        assert_eq!(build_row("Phone", "123", 11), "Phone:  123");
        assert_eq!(build_row("Phone", "123", 5), "Phone: 123");
    }

    #[test]
    fn card_lists_fields_with_ids() {
        let record = Record {
            id: 3,
            name: "Test".into(),
            birthday: date(2022, 6, 29),
            phones: vec![Phone {
                id: 4,
                number: "380686543423".into(),
            }],
            emails: vec![],
            addresses: vec![],
            notes: vec![Note {
                id: 5,
                title: "test note".into(),
                tags: vec![Tag {
                    id: 6,
                    title: "work".into(),
                }],
            }],
        };
        let card = record_card(&record, date(2022, 5, 28));
        let lines: Vec<&str> = card.lines().collect();
        assert!(lines[0].starts_with("Test (#3) ---"));
        assert!(lines[1].starts_with("Birthday: ") && lines[1].ends_with("2022-06-29"));
        assert!(lines[2].ends_with("32 days left till next birthday"));
        assert!(lines[3].starts_with("Phone #4: ") && lines[3].ends_with("380686543423"));
        assert!(lines[4].starts_with("Note #5: ") && lines[4].ends_with("test note"));
        assert!(lines[5].starts_with("  Tag #6: ") && lines[5].ends_with("work"));
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn empty_birthdays_substitutes_message() {
        assert_eq!(birthdays(&[]), NO_BIRTHDAYS);
    }

    #[test]
    fn empty_search_substitutes_message() {
        assert_eq!(search_results(&[], date(2022, 1, 1)), NO_RESULTS);
    }
}
