//! API request types for the users endpoints.

use serde::{Deserialize, Serialize};

use super::types::DEFAULT_PHOTO_URL;

/// Payload for `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl RegisterRequest {
    /// Creates a request with no photo URL.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            photo_url: None,
        }
    }

    /// Sets the photo URL.
    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    /// Substitutes the placeholder photo when none was given. Called after
    /// validation, right before submission.
    pub fn with_default_photo(mut self) -> Self {
        if self.photo_url.as_deref().is_none_or(str::is_empty) {
            self.photo_url = Some(DEFAULT_PHOTO_URL.to_string());
        }
        self
    }
}

/// Payload for `POST /api/users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
