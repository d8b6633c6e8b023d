use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};

/// Personal address book with upcoming-birthday lookups.
#[derive(Parser)]
#[command(name = "contactbook", version, about = "Personal address book")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "contactbook.toml")]
    pub config: PathBuf,

    /// Override the data file from config.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List contacts, one page at a time.
    List {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show one contact.
    Show { id: u32 },
    /// Find contacts by name.
    Search {
        name: String,
        /// Match any name containing NAME, ignoring case.
        #[arg(long)]
        contains: bool,
    },
    /// Add a contact.
    Add(AddArgs),
    /// Change a contact's name or birthday.
    #[command(group(
        ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["name", "birthday"])
    ))]
    EditRecord {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_date)]
        birthday: Option<NaiveDate>,
    },
    EditPhone { id: u32, number: String },
    EditEmail { id: u32, email: String },
    EditAddress { id: u32, address: String },
    EditNote { id: u32, note: String },
    /// Attach a tag to a note.
    AddTag { note_id: u32, title: String },
    EditTag { id: u32, title: String },
    /// Delete a contact and everything attached to it.
    Delete {
        id: u32,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Contacts with a birthday within PERIOD days from today.
    Birthdays {
        period: String,
        /// Use this date instead of today.
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

#[derive(clap::Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    /// Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub birthday: Option<NaiveDate>,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    contactbook::calendar::parse_iso_date(s).map_err(|e| e.to_string())
}
