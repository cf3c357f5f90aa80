//! Account and session CLI commands.

use clap::{Parser, Subcommand};

/// Account and session management commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available auth actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Create an account and start a session.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Password (at least 6 characters).
        #[arg(long)]
        password: String,
        /// Avatar URL; a placeholder is used when omitted.
        #[arg(long)]
        photo_url: Option<String>,
    },
    /// Log in with email and password.
    Login {
        /// Email address.
        #[arg(long)]
        email: String,
        /// Password.
        #[arg(long)]
        password: String,
    },
    /// End the current session.
    Logout,
    /// Show the current session user.
    Whoami,
}
