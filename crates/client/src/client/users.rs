//! User API operations.

use eventy_core::auth::{LoginRequest, RegisterRequest, User};

use super::EventyClient;
use crate::api::AuthBody;
use crate::error::Result;

impl EventyClient {
    /// Register a new user account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        tracing::debug!(email = %request.email, "registering user");
        let response = self
            .client
            .post(self.url("/api/users"))
            .json(request)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body: AuthBody = self.handle_response(response).await?;
        body.into_user(status)
    }

    /// Log in with email and password.
    ///
    /// Rejections arrive as `{success: false, error}` even on a 2xx status;
    /// both that shape and a plain error status map to the same variant.
    pub async fn login(&self, request: &LoginRequest) -> Result<User> {
        tracing::debug!(email = %request.email, "logging in");
        let response = self
            .client
            .post(self.url("/api/users/login"))
            .json(request)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body: AuthBody = self.handle_response(response).await?;
        body.into_user(status)
    }
}
