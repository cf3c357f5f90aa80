use serde::{Deserialize, Serialize};

/// Avatar substituted when registration supplies no photo URL.
pub const DEFAULT_PHOTO_URL: &str = "https://img.freepik.com/premium-vector/male-face-avatar-icon-set-flat-design-social-media-profiles_1281173-3806.jpg";

/// A registered user as returned by the users API.
///
/// Passwords are sent on register/login and never stored client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", default = "default_photo_url")]
    pub photo_url: String,
}

impl User {
    /// Creates a user with the placeholder photo.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            photo_url: default_photo_url(),
        }
    }

    /// Sets the photo URL.
    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = photo_url.into();
        self
    }
}

fn default_photo_url() -> String {
    DEFAULT_PHOTO_URL.to_string()
}

/// The client-held record of the authenticated user.
///
/// At most one session exists at a time; it is created on successful
/// login or registration, persisted across runs, and destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
}

impl Session {
    /// Starts a session for the given user.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Id of the authenticated user.
    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_photo_defaults_to_placeholder() {
        let json = r#"{"id":"user-1","name":"Alice","email":"alice@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.photo_url, DEFAULT_PHOTO_URL);
    }

    #[test]
    fn test_user_photo_from_wire() {
        let json = r#"{
            "id": "user-1",
            "name": "Alice",
            "email": "alice@example.com",
            "photoURL": "https://example.com/alice.png"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.photo_url, "https://example.com/alice.png");
    }

    #[test]
    fn test_session_round_trips() {
        let session = Session::new(User::new("user-1", "Alice", "alice@example.com"));
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
        assert_eq!(restored.user_id(), "user-1");
    }
}
