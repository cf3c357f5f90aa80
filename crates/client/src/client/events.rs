//! Event API operations.

use eventy_core::event::{CreateEventRequest, Event, UpdateEventRequest};
use serde::Serialize;

use super::EventyClient;
use crate::api::{CreatedBody, DeletedBody, EventsBody, JoinedBody, UpdatedBody};
use crate::error::{ClientError, Result};

/// Body of `POST /api/events/{id}/attendees`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinBody<'a> {
    user_id: &'a str,
}

impl EventyClient {
    /// Fetch the full event collection.
    pub async fn events(&self) -> Result<Vec<Event>> {
        tracing::debug!("fetching events");
        let response = self.client.get(self.url("/api/events")).send().await?;
        let body: EventsBody = self.handle_response(response).await?;
        Ok(body.events)
    }

    /// Create a new event.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        tracing::debug!(title = %request.title, "creating event");
        let response = self
            .client
            .post(self.url("/api/events"))
            .json(request)
            .send()
            .await?;
        let body: CreatedBody = self.handle_response(response).await?;
        Ok(body.event)
    }

    /// Replace the mutable fields of an event.
    ///
    /// A 2xx reply still carries a success flag; a false flag is treated as
    /// a server rejection.
    pub async fn update_event(&self, event_id: &str, request: &UpdateEventRequest) -> Result<()> {
        tracing::debug!(event_id, "updating event");
        let response = self
            .client
            .put(self.url(&format!("/api/events/{event_id}")))
            .json(request)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body: UpdatedBody = self.handle_response(response).await?;
        if body.success {
            Ok(())
        } else {
            Err(ClientError::Api {
                status,
                error: "Update Failed".to_string(),
                message: "The server did not accept the update".to_string(),
            })
        }
    }

    /// Delete an event by id; returns the deleted id.
    pub async fn delete_event(&self, event_id: &str) -> Result<String> {
        tracing::debug!(event_id, "deleting event");
        let response = self
            .client
            .delete(self.url(&format!("/api/events/{event_id}")))
            .send()
            .await?;
        let body: DeletedBody = self.handle_response(response).await?;
        Ok(body.event_id)
    }

    /// Join an event as an attendee; returns the updated event.
    pub async fn join_event(&self, event_id: &str, user_id: &str) -> Result<Event> {
        tracing::debug!(event_id, user_id, "joining event");
        let response = self
            .client
            .post(self.url(&format!("/api/events/{event_id}/attendees")))
            .json(&JoinBody { user_id })
            .send()
            .await?;
        let body: JoinedBody = self.handle_response(response).await?;
        Ok(body.event)
    }
}
