//! Subcommand handlers: load the book, run one operation, save if it changed.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{info, info_span};

use contactbook::{AddressBook, JsonStore, NewRecord, SearchMode, render};

use crate::cli::{Cli, Command};
use crate::config::BookConfig;

/// Runs the parsed command line and returns the text to print.
pub async fn run(cli: Cli) -> Result<String> {
    let mut config = BookConfig::load(&cli.config).await?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }

    let store = JsonStore::new(&config.data_file);
    let data = store
        .load()
        .await
        .with_context(|| format!("failed to load contacts: {}", store.path().display()))?;
    let mut book = AddressBook::new(data);
    let today = Local::now().date_naive();

    let (output, changed) = execute(&mut book, cli.command, &config, today)?;
    if changed {
        store
            .save(book.data())
            .await
            .with_context(|| format!("failed to save contacts: {}", store.path().display()))?;
    }
    Ok(output)
}

/// Applies `command` to `book`. Returns the output and whether the book changed.
pub fn execute(
    book: &mut AddressBook,
    command: Command,
    config: &BookConfig,
    today: NaiveDate,
) -> Result<(String, bool)> {
    let out = match command {
        Command::List { page } => {
            let _span = info_span!("list", page).entered();
            let page = book.page(page, config.per_page)?;
            (render::page(&page, today), false)
        }
        Command::Show { id } => (render::record_card(book.record(id)?, today), false),
        Command::Search { name, contains } => {
            let mode = if contains {
                SearchMode::Contains
            } else {
                SearchMode::Exact
            };
            let found = book.search(&name, mode)?;
            (render::search_results(&found, today), false)
        }
        Command::Add(args) => {
            let record = book.add_record(NewRecord {
                name: args.name,
                birthday: args.birthday.unwrap_or(today),
                phone: args.phone,
                email: args.email,
                address: args.address,
                note: args.note,
            })?;
            (render::record_saved(&record.name), true)
        }
        Command::EditRecord { id, name, birthday } => {
            let changed = name.is_some() || birthday.is_some();
            book.edit_record(id, name, birthday)?;
            if changed {
                (render::CHANGES_SAVED.to_string(), true)
            } else {
                (render::NO_CHANGES.to_string(), false)
            }
        }
        Command::EditPhone { id, number } => {
            book.edit_phone(id, &number)?;
            (render::CHANGES_SAVED.to_string(), true)
        }
        Command::EditEmail { id, email } => {
            book.edit_email(id, &email)?;
            (render::CHANGES_SAVED.to_string(), true)
        }
        Command::EditAddress { id, address } => {
            book.edit_address(id, &address)?;
            (render::CHANGES_SAVED.to_string(), true)
        }
        Command::EditNote { id, note } => {
            book.edit_note(id, &note)?;
            (render::CHANGES_SAVED.to_string(), true)
        }
        Command::AddTag { note_id, title } => {
            book.add_tag(note_id, &title)?;
            (render::TAG_SAVED.to_string(), true)
        }
        Command::EditTag { id, title } => {
            book.edit_tag(id, &title)?;
            (render::CHANGES_SAVED.to_string(), true)
        }
        Command::Delete { id, yes } => {
            if !yes {
                let name = &book.record(id)?.name;
                (
                    format!("{}\nRe-run with --yes to confirm.", render::delete_prompt(name)),
                    false,
                )
            } else {
                let record = book.delete_record(id)?;
                (render::record_deleted(&record.name), true)
            }
        }
        Command::Birthdays { period, today: at } => {
            let anchor = at.unwrap_or(today);
            let _span = info_span!("birthdays", %anchor).entered();
            let found = book.holidays_period(anchor, &period, config.max_period)?;
            info!(hits = found.len(), "birthday window computed");
            (render::birthdays(&found), false)
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AddArgs;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(name: &str, birthday: &str) -> Command {
        Command::Add(AddArgs {
            name: name.into(),
            birthday: Some(contactbook::calendar::parse_iso_date(birthday).unwrap()),
            phone: "380686543423".into(),
            email: "test@test.ua".into(),
            address: Some("st. Test 123".into()),
            note: Some("test note".into()),
        })
    }

    fn seeded() -> AddressBook {
        let mut book = AddressBook::default();
        let cfg = BookConfig::default();
        let today = date(2022, 5, 28);
        execute(&mut book, add("Test", "2022-06-29"), &cfg, today).unwrap();
        execute(&mut book, add("Test1", "1987-04-10"), &cfg, today).unwrap();
        book
    }

    #[test]
    fn add_reports_saved_name() {
        let mut book = AddressBook::default();
        let (out, changed) = execute(
            &mut book,
            add("test", "2022-06-29"),
            &BookConfig::default(),
            date(2022, 5, 28),
        )
        .unwrap();
        assert_eq!(out, "Record have been saved! Test");
        assert!(changed);
    }

    #[test]
    fn birthdays_command_renders_lines() {
        let mut book = seeded();
        let cmd = Command::Birthdays {
            period: "365".into(),
            today: None,
        };
        let (out, changed) =
            execute(&mut book, cmd, &BookConfig::default(), date(2022, 5, 28)).unwrap();
        assert_eq!(
            out,
            "Test 2022-06-29 | 32 days left till next birthday\n\
             Test1 1987-04-10 | 317 days left till next birthday"
        );
        assert!(!changed);
    }

    #[test]
    fn birthdays_command_uses_configured_max() {
        let mut book = seeded();
        let cfg = BookConfig {
            max_period: 30,
            ..BookConfig::default()
        };
        let cmd = Command::Birthdays {
            period: "31".into(),
            today: None,
        };
        let err = execute(&mut book, cmd, &cfg, date(2022, 5, 28)).unwrap_err();
        assert_eq!(err.to_string(), "Period cannot be more than 30");
    }

    #[test]
    fn edit_record_without_fields_is_not_saved() {
        let mut book = seeded();
        let cmd = Command::EditRecord {
            id: 1,
            name: None,
            birthday: None,
        };
        let (out, changed) =
            execute(&mut book, cmd, &BookConfig::default(), date(2022, 5, 28)).unwrap();
        assert_eq!(out, render::NO_CHANGES);
        assert!(!changed);
    }

    #[test]
    fn delete_without_confirmation_keeps_record() {
        let mut book = seeded();
        let cmd = Command::Delete { id: 1, yes: false };
        let (out, changed) =
            execute(&mut book, cmd, &BookConfig::default(), date(2022, 5, 28)).unwrap();
        assert!(out.starts_with("Delete record: Test?"));
        assert!(!changed);
        assert_eq!(book.records().len(), 2);
    }

    #[test]
    fn delete_with_confirmation() {
        let mut book = seeded();
        let cmd = Command::Delete { id: 1, yes: true };
        let (out, _) = execute(&mut book, cmd, &BookConfig::default(), date(2022, 5, 28)).unwrap();
        assert_eq!(out, "Your delete contact: Test");
        assert_eq!(book.records().len(), 1);
    }

    #[tokio::test]
    async fn run_persists_between_invocations() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("contacts.json");
        let data_arg = data.to_str().unwrap();
        let config = dir.path().join("missing.toml");
        let config_arg = config.to_str().unwrap();

        let cli = Cli::try_parse_from([
            "contactbook",
            "--config",
            config_arg,
            "--data",
            data_arg,
            "add",
            "--name",
            "ann",
            "--birthday",
            "1990-01-05",
            "--phone",
            "380686543423",
            "--email",
            "ann@test.ua",
        ])
        .unwrap();
        assert_eq!(run(cli).await.unwrap(), "Record have been saved! Ann");
        assert!(data.exists());

        let cli = Cli::try_parse_from([
            "contactbook",
            "--config",
            config_arg,
            "--data",
            data_arg,
            "birthdays",
            "20",
            "--today",
            "2022-12-20",
        ])
        .unwrap();
        assert_eq!(
            run(cli).await.unwrap(),
            "Ann 1990-01-05 | 16 days left till next birthday"
        );
    }
}
