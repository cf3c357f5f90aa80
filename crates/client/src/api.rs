//! Typed surface of the remote events API.
//!
//! Response bodies are dynamic on the wire (`{success, ...}` on one path,
//! `{error, message}` on another); they are interpreted once, here and in
//! [`crate::client`], so the coordinators pattern-match on explicit
//! variants instead of probing shapes.

use async_trait::async_trait;
use eventy_core::auth::User;
use eventy_core::event::{CreateEventRequest, Event, UpdateEventRequest};
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Operations of the remote events API consumed by the coordinators.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// Fetches the full event collection.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Creates an event; returns the stored copy.
    async fn create_event(&self, request: &CreateEventRequest) -> Result<Event>;

    /// Replaces the mutable fields of the event with the given id.
    async fn update_event(&self, event_id: &str, request: &UpdateEventRequest) -> Result<()>;

    /// Deletes the event with the given id; returns the deleted id.
    async fn delete_event(&self, event_id: &str) -> Result<String>;

    /// Adds the user to the event's attendees; returns the updated event.
    async fn join_event(&self, event_id: &str, user_id: &str) -> Result<Event>;
}

/// Body of `GET /api/events`.
#[derive(Debug, Deserialize)]
pub(crate) struct EventsBody {
    pub events: Vec<Event>,
}

/// Body of a successful `POST /api/events`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedBody {
    pub event: Event,
}

/// Body of `PUT /api/events/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdatedBody {
    #[serde(default)]
    pub success: bool,
}

/// Body of a successful `DELETE /api/events/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct DeletedBody {
    #[serde(rename = "eventId")]
    pub event_id: String,
}

/// Body of a successful `POST /api/events/{id}/attendees`.
#[derive(Debug, Deserialize)]
pub(crate) struct JoinedBody {
    pub event: Event,
}

/// The users endpoints reply with either a user or an error string (plus a
/// success flag that is redundant with which of the two is present).
#[derive(Debug, Deserialize)]
pub(crate) struct AuthBody {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthBody {
    /// Resolve the dynamic shape into a user or an API error.
    pub fn into_user(self, status: u16) -> Result<User> {
        if let Some(error) = self.error {
            return Err(ClientError::Api {
                status,
                error,
                message: "Unknown error".to_string(),
            });
        }
        match self.user {
            Some(user) => Ok(user),
            None => Err(ClientError::InvalidResponse(
                "auth response carried neither a user nor an error".to_string(),
            )),
        }
    }
}

/// Error body attached to non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FailureBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
