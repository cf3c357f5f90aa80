//! The join-event workflow.
//!
//! A join runs `Idle → Confirming → Submitting → {Succeeded, Failed}` and
//! settles back to `Idle`. Only one attempt may be in flight at a time: the
//! server does not guarantee idempotency, so refusing re-entry here is the
//! only backpressure against duplicate submissions.

use eventy_core::auth::User;
use eventy_core::event::{sort_events_by_start, Event};

use crate::api::EventsApi;
use crate::error::{ClientError, Result};
use crate::notify::Notify;

/// States of a join attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinState {
    #[default]
    Idle,
    Confirming,
    Submitting,
    Succeeded,
    Failed,
}

/// Server-reported join rejections, keyed by the error identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinFailure {
    AlreadyAttendee,
    UserNotFound,
    EventNotFound,
    /// Unrecognized identifier, shown verbatim as the notice title.
    Other(String),
}

impl JoinFailure {
    /// Map the server's error identifier to a known rejection.
    pub fn from_api(error: &str) -> Self {
        match error {
            "User is already an attendee" => JoinFailure::AlreadyAttendee,
            "User not found" => JoinFailure::UserNotFound,
            "Event not found" => JoinFailure::EventNotFound,
            other => JoinFailure::Other(other.to_string()),
        }
    }

    /// Title of the failure notice.
    pub fn title(&self) -> &str {
        match self {
            JoinFailure::AlreadyAttendee => "User is already an attendee",
            JoinFailure::UserNotFound => "User not found",
            JoinFailure::EventNotFound => "Event not found",
            JoinFailure::Other(error) if !error.is_empty() => error,
            JoinFailure::Other(_) => "Join Failed",
        }
    }

    /// User-facing explanation.
    pub fn message(&self) -> &'static str {
        match self {
            JoinFailure::AlreadyAttendee => "You have already joined this event!",
            JoinFailure::UserNotFound => "User account not found. Please login again.",
            JoinFailure::EventNotFound => "This event no longer exists.",
            JoinFailure::Other(_) => "Something went wrong while joining.",
        }
    }
}

/// Terminal result of a join attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Local pre-check hit: the user is already an attendee; nothing was
    /// sent.
    AlreadyJoined,
    /// The user declined the confirmation prompt.
    Cancelled,
    /// The server accepted the join. `events` is the refetched collection
    /// that replaces the cache, or `None` when the refetch itself failed
    /// (the caller keeps its current copy).
    Joined {
        event: Event,
        events: Option<Vec<Event>>,
    },
    /// The server rejected the join.
    Rejected(JoinFailure),
    /// The request never completed; distinct from a server rejection.
    NetworkError(String),
}

/// Whether the join control is unavailable for this user, independent of
/// any workflow state.
pub fn join_disabled(event: &Event, user: &User) -> bool {
    event.has_attendee(&user.id)
}

/// Drives a single join attempt: pre-check, confirmation, submission,
/// response interpretation, and post-join refetch.
pub struct JoinCoordinator<'a, A, N> {
    api: &'a A,
    notify: &'a mut N,
    state: JoinState,
}

impl<'a, A: EventsApi, N: Notify> JoinCoordinator<'a, A, N> {
    pub fn new(api: &'a A, notify: &'a mut N) -> Self {
        Self {
            api,
            notify,
            state: JoinState::Idle,
        }
    }

    /// Current workflow state.
    pub fn state(&self) -> JoinState {
        self.state
    }

    /// Run the workflow for one event.
    ///
    /// Errs only when another attempt is still in flight; every other path
    /// is a terminal [`JoinOutcome`] and settles the coordinator back to
    /// `Idle`.
    pub async fn join(&mut self, event: &Event, user: &User) -> Result<JoinOutcome> {
        if self.state != JoinState::Idle {
            return Err(ClientError::InFlight);
        }

        // Local shortcut only; the server re-checks membership.
        if event.has_attendee(&user.id) {
            self.notify
                .info("Already Joined", "You have already joined this event!");
            return Ok(JoinOutcome::AlreadyJoined);
        }

        self.state = JoinState::Confirming;
        let prompt = format!("Do you want to join \"{}\"?", event.title);
        if !self.notify.confirm(&prompt) {
            self.state = JoinState::Idle;
            return Ok(JoinOutcome::Cancelled);
        }

        self.state = JoinState::Submitting;
        let outcome = match self.api.join_event(&event.id, &user.id).await {
            Ok(joined) => {
                self.state = JoinState::Succeeded;
                self.notify.success(
                    "Joined Successfully!",
                    &format!("You have successfully joined \"{}\"", joined.title),
                );
                let events = self.refetch().await;
                JoinOutcome::Joined {
                    event: joined,
                    events,
                }
            }
            Err(ClientError::Api { error, .. }) => {
                self.state = JoinState::Failed;
                let failure = JoinFailure::from_api(&error);
                self.notify.error(failure.title(), failure.message());
                JoinOutcome::Rejected(failure)
            }
            Err(err) => {
                self.state = JoinState::Failed;
                tracing::debug!(%err, "join request did not complete");
                self.notify.error(
                    "Network Error",
                    "Failed to join the event due to a network error.",
                );
                JoinOutcome::NetworkError(err.to_string())
            }
        };

        self.state = JoinState::Idle;
        Ok(outcome)
    }

    /// Refetch the collection after a confirmed join. Attendee data is
    /// never incremented locally; the server's copy replaces ours.
    async fn refetch(&self) -> Option<Vec<Event>> {
        match self.api.list_events().await {
            Ok(mut events) => {
                sort_events_by_start(&mut events);
                Some(events)
            }
            Err(err) => {
                tracing::warn!(%err, "refetch after join failed");
                None
            }
        }
    }
}
