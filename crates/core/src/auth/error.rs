use thiserror::Error;

/// Field-level problems with a registration submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Email is invalid")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please enter a valid URL")]
    InvalidPhotoUrl,
}

impl RegistrationError {
    /// The field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            RegistrationError::MissingName => "name",
            RegistrationError::MissingEmail | RegistrationError::InvalidEmail => "email",
            RegistrationError::MissingPassword | RegistrationError::PasswordTooShort => "password",
            RegistrationError::InvalidPhotoUrl => "photoURL",
        }
    }
}

/// Problems with a login submission. Presence checks only; credentials are
/// verified by the server.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
}
