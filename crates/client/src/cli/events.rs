//! Event CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use eventy_core::event::DateBucket;
use eventy_core::serde::hour_minute::parse_wire_time;

/// Event browsing and management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Date filter options for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterOption {
    /// All events.
    #[default]
    All,
    /// Today's events.
    Today,
    /// This week (Sunday through Saturday).
    CurrentWeek,
    /// Last week.
    LastWeek,
    /// This month onward.
    CurrentMonth,
    /// Last month.
    LastMonth,
}

impl From<FilterOption> for DateBucket {
    fn from(option: FilterOption) -> Self {
        match option {
            FilterOption::All => DateBucket::All,
            FilterOption::Today => DateBucket::Today,
            FilterOption::CurrentWeek => DateBucket::CurrentWeek,
            FilterOption::LastWeek => DateBucket::LastWeek,
            FilterOption::CurrentMonth => DateBucket::CurrentMonth,
            FilterOption::LastMonth => DateBucket::LastMonth,
        }
    }
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List events, optionally filtered.
    List {
        /// Case-insensitive title search.
        #[arg(long)]
        search: Option<String>,
        /// Date bucket to filter by.
        #[arg(long, value_enum, default_value = "all")]
        filter: FilterOption,
    },
    /// List events created by the current user.
    Mine,
    /// Create a new event.
    Create {
        /// Event title.
        #[arg(long)]
        title: String,
        /// Event date (YYYY-MM-DD), today or later.
        #[arg(long)]
        date: NaiveDate,
        /// Event time (HH:MM).
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        /// Event location.
        #[arg(long)]
        location: String,
        /// Event description (at least 10 characters).
        #[arg(long)]
        description: String,
    },
    /// Join an event as an attendee.
    Join {
        /// Event id.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Update an event you created.
    Update {
        /// Event id.
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New time (HH:MM).
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// New location.
        #[arg(long)]
        location: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event you created.
    Delete {
        /// Event id.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    parse_wire_time(s).map_err(|err| format!("invalid time {s:?}: expected HH:MM ({err})"))
}
