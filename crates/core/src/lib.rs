//! Core domain logic for the eventy project.
//!
//! Everything in this crate is I/O-free: the wire types of the events API,
//! field validation, and the date-bucket/filter/sort logic the client
//! derives its views from.

pub mod auth;
pub mod event;
pub mod serde;
