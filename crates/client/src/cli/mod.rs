//! CLI command definitions.

pub mod auth;
pub mod events;

use clap::{Parser, Subcommand, ValueEnum};

/// Discover, join, and manage community events from the terminal.
#[derive(Debug, Parser)]
#[command(name = "eventy")]
#[command(about = "CLI client for the eventy events API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "EVENTY_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Account and session management.
    Auth(auth::AuthCommand),
    /// Browse, join, and manage events.
    Events(events::EventsCommand),
}
