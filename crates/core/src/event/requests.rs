//! API request types for event operations.
//!
//! Pure data types shared between the CLI and the HTTP client; validation
//! lives in [`super::operations`].

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::types::Event;

/// Payload for `POST /api/events`.
///
/// New events always start with an empty attendee set; the organizer fields
/// come from the session user, never from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    /// Organizer display name.
    pub name: String,
    /// Organizer user id.
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(with = "crate::serde::hour_minute")]
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    pub attendee_count: u32,
    pub attendees: Vec<String>,
}

impl CreateEventRequest {
    /// Creates a request with no organizer set.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            name: String::new(),
            user_id: String::new(),
            date,
            time,
            location: location.into(),
            description: description.into(),
            attendee_count: 0,
            attendees: Vec::new(),
        }
    }

    /// Sets the organizer name and user id.
    pub fn with_organizer(mut self, name: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.name = name.into();
        self.user_id = user_id.into();
        self
    }
}

/// Payload for `PUT /api/events/{id}`: a full replacement of the mutable
/// fields. Id, organizer, and attendee data are never part of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "crate::serde::hour_minute")]
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
}

impl UpdateEventRequest {
    /// Starts an update from the event's current mutable fields.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date,
            time: event.time,
            location: event.location.clone(),
            description: event.description.clone(),
        }
    }

    /// Replaces the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Replaces the time.
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Replaces the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Replaces the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
