//! eventy_client - CLI client for the eventy events API.

pub mod api;
pub mod cli;
pub mod client;
pub mod error;
pub mod join;
pub mod lifecycle;
pub mod notify;
pub mod output;
pub mod session;

pub use client::EventyClient;
pub use error::{ClientError, Result};
