//! Create, update, and delete workflows for events the user owns.
//!
//! Each flow runs confirm/validate → submit → interpret → refresh, in that
//! order. The cached list is only ever replaced after the server confirms a
//! mutation; failures leave the previously displayed list unchanged.

use chrono::NaiveDate;
use eventy_core::auth::User;
use eventy_core::event::{
    events_created_by, sort_events_by_start, validate_new_event, CreateEventRequest, Event,
    EventFieldError, UpdateEventRequest,
};

use crate::api::EventsApi;
use crate::error::ClientError;
use crate::notify::Notify;

/// Terminal result of a create attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Local validation failed; nothing was submitted.
    Invalid(Vec<EventFieldError>),
    /// The server stored the event.
    Created(Event),
    /// The server rejected the submission.
    Failed { error: String, message: String },
    /// The request never completed.
    NetworkError(String),
}

/// Terminal result of an update attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The server accepted the replacement. `events` is the owner's
    /// refetched list, or `None` when the refetch itself failed.
    Updated { events: Option<Vec<Event>> },
    /// The server rejected the update; detail is best-effort.
    Failed { detail: Option<String> },
    /// The request never completed.
    NetworkError(String),
}

/// Terminal result of a delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt.
    Cancelled,
    /// The server deleted the event. `events` is the owner's refetched
    /// list, or `None` when the refetch itself failed.
    Deleted {
        event_id: String,
        events: Option<Vec<Event>>,
    },
    /// The server refused the deletion; the displayed list is unchanged.
    Failed { error: String, message: String },
    /// The request never completed.
    NetworkError(String),
}

/// Drives create/update/delete against the remote API.
pub struct LifecycleCoordinator<'a, A, N> {
    api: &'a A,
    notify: &'a mut N,
}

impl<'a, A: EventsApi, N: Notify> LifecycleCoordinator<'a, A, N> {
    pub fn new(api: &'a A, notify: &'a mut N) -> Self {
        Self { api, notify }
    }

    /// Validate and submit a new event.
    ///
    /// `today` is the reference date for the no-past-dates rule. Attendee
    /// data always starts empty; the organizer fields must already be set
    /// from the session user.
    pub async fn create(&mut self, request: CreateEventRequest, today: NaiveDate) -> CreateOutcome {
        if let Err(errors) = validate_new_event(&request, today) {
            for error in &errors {
                self.notify.error(error.field(), &error.to_string());
            }
            return CreateOutcome::Invalid(errors);
        }

        match self.api.create_event(&request).await {
            Ok(event) => {
                self.notify.success(
                    "Event Created!",
                    &format!("\"{}\" has been successfully created.", event.title),
                );
                CreateOutcome::Created(event)
            }
            Err(ClientError::Api { error, message, .. }) => {
                self.notify
                    .error("Creation Failed", &format!("Failed to create event. {message}"));
                CreateOutcome::Failed { error, message }
            }
            Err(err) => {
                tracing::debug!(%err, "create request did not complete");
                self.notify.error(
                    "Creation Failed",
                    "Failed to create event due to a network error.",
                );
                CreateOutcome::NetworkError(err.to_string())
            }
        }
    }

    /// Submit a full replacement of the event's mutable fields, then
    /// refresh the owner's list.
    pub async fn update(
        &mut self,
        event: &Event,
        changes: UpdateEventRequest,
        owner: &User,
    ) -> UpdateOutcome {
        match self.api.update_event(&event.id, &changes).await {
            Ok(()) => {
                self.notify.success(
                    "Event Updated!",
                    &format!("\"{}\" has been updated.", changes.title),
                );
                let events = self.refetch_owned(owner).await;
                UpdateOutcome::Updated { events }
            }
            Err(ClientError::Api { message, .. }) => {
                self.notify
                    .error("Update Failed", "Something went wrong while updating the event.");
                UpdateOutcome::Failed {
                    detail: Some(message),
                }
            }
            Err(err) => {
                tracing::debug!(%err, "update request did not complete");
                self.notify.error(
                    "Update Failed",
                    "Failed to update the event due to a network error.",
                );
                UpdateOutcome::NetworkError(err.to_string())
            }
        }
    }

    /// Confirm and delete an event.
    ///
    /// The cached list is only replaced after the server confirms; a failed
    /// deletion never silently looks like a success.
    pub async fn delete(&mut self, event: &Event, owner: &User) -> DeleteOutcome {
        let prompt = format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            event.title
        );
        if !self.notify.confirm(&prompt) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_event(&event.id).await {
            Ok(event_id) => {
                self.notify
                    .success("Deleted!", "Event has been deleted successfully.");
                let events = self.refetch_owned(owner).await;
                DeleteOutcome::Deleted { event_id, events }
            }
            Err(ClientError::Api { error, message, .. }) => {
                self.notify.error(&error, &message);
                DeleteOutcome::Failed { error, message }
            }
            Err(err) => {
                tracing::debug!(%err, "delete request did not complete");
                self.notify.error(
                    "Network Error",
                    "Failed to delete the event due to a network error.",
                );
                DeleteOutcome::NetworkError(err.to_string())
            }
        }
    }

    /// Refetch the collection and keep the owner's events, sorted.
    async fn refetch_owned(&self, owner: &User) -> Option<Vec<Event>> {
        match self.api.list_events().await {
            Ok(mut events) => {
                sort_events_by_start(&mut events);
                Some(
                    events_created_by(&events, &owner.id)
                        .into_iter()
                        .cloned()
                        .collect(),
                )
            }
            Err(err) => {
                tracing::warn!(%err, "refetch after mutation failed");
                None
            }
        }
    }
}
