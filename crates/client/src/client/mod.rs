//! HTTP client for the eventy API.

pub mod events;
pub mod users;

use async_trait::async_trait;
use eventy_core::event::{CreateEventRequest, Event, UpdateEventRequest};

use crate::api::{EventsApi, FailureBody};
use crate::error::{ClientError, Result};

/// HTTP client for the eventy API.
#[derive(Debug, Clone)]
pub struct EventyClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventyClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (EVENTY_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("EVENTY_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Deserialize a success body, or read the error body into
    /// [`ClientError::Api`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(self.failure(status.as_u16(), response).await)
        }
    }

    /// Read a non-success body into the API error variant. The body's
    /// `error`/`message` fields are both optional on the wire.
    async fn failure(&self, status: u16, response: reqwest::Response) -> ClientError {
        let body: FailureBody = response.json().await.unwrap_or_default();
        ClientError::Api {
            status,
            error: body.error.unwrap_or_else(|| "Request Failed".to_string()),
            message: body.message.unwrap_or_else(|| "Unknown error".to_string()),
        }
    }
}

#[async_trait]
impl EventsApi for EventyClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        self.events().await
    }

    async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        EventyClient::create_event(self, request).await
    }

    async fn update_event(&self, event_id: &str, request: &UpdateEventRequest) -> Result<()> {
        EventyClient::update_event(self, event_id, request).await
    }

    async fn delete_event(&self, event_id: &str) -> Result<String> {
        EventyClient::delete_event(self, event_id).await
    }

    async fn join_event(&self, event_id: &str, user_id: &str) -> Result<Event> {
        EventyClient::join_event(self, event_id, user_id).await
    }
}
