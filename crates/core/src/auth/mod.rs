mod error;
mod requests;
mod types;
mod validation;

pub use error::{CredentialsError, RegistrationError};
pub use requests::{LoginRequest, RegisterRequest};
pub use types::{Session, User, DEFAULT_PHOTO_URL};
pub use validation::{is_valid_email, validate_credentials, validate_registration};
