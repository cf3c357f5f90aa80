use url::Url;

use super::error::{CredentialsError, RegistrationError};
use super::requests::{LoginRequest, RegisterRequest};

/// Validates a registration submission before it is sent.
///
/// Failures cover every offending field. The photo URL is optional but must
/// parse as a URL when given.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), Vec<RegistrationError>> {
    let mut errors = Vec::new();

    if request.name.trim().is_empty() {
        errors.push(RegistrationError::MissingName);
    }
    if request.email.is_empty() {
        errors.push(RegistrationError::MissingEmail);
    } else if !is_valid_email(&request.email) {
        errors.push(RegistrationError::InvalidEmail);
    }
    if request.password.is_empty() {
        errors.push(RegistrationError::MissingPassword);
    } else if request.password.chars().count() < 6 {
        errors.push(RegistrationError::PasswordTooShort);
    }
    if let Some(photo_url) = request.photo_url.as_deref() {
        if !photo_url.is_empty() && Url::parse(photo_url).is_err() {
            errors.push(RegistrationError::InvalidPhotoUrl);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a login submission. Presence only; the server verifies the
/// credentials themselves.
pub fn validate_credentials(request: &LoginRequest) -> Result<(), Vec<CredentialsError>> {
    let mut errors = Vec::new();

    if request.email.is_empty() {
        errors.push(CredentialsError::MissingEmail);
    }
    if request.password.is_empty() {
        errors.push(CredentialsError::MissingPassword);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Shape check only: whitespace-free text around an `@`, with a dotted
/// domain after it. Deliverability is the server's concern.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, rest)) = email.split_once('@') else {
        return false;
    };
    let Some((domain, tld)) = rest.rsplit_once('.') else {
        return false;
    };
    let part_ok = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    part_ok(local) && part_ok(domain) && part_ok(tld)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest::new("Alice", "alice@example.com", "secret1")
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration(&valid_request()).is_ok());
    }

    #[test]
    fn test_missing_name() {
        let mut request = valid_request();
        request.name = "  ".to_string();
        assert_eq!(
            validate_registration(&request),
            Err(vec![RegistrationError::MissingName])
        );
    }

    #[test]
    fn test_missing_email_and_invalid_email_are_distinct() {
        let mut request = valid_request();
        request.email = String::new();
        assert_eq!(
            validate_registration(&request),
            Err(vec![RegistrationError::MissingEmail])
        );

        request.email = "not-an-email".to_string();
        assert_eq!(
            validate_registration(&request),
            Err(vec![RegistrationError::InvalidEmail])
        );
    }

    #[test]
    fn test_short_password() {
        let mut request = valid_request();
        request.password = "abc".to_string();
        assert_eq!(
            validate_registration(&request),
            Err(vec![RegistrationError::PasswordTooShort])
        );
    }

    #[test]
    fn test_invalid_photo_url() {
        let request = valid_request().with_photo_url("not a url");
        assert_eq!(
            validate_registration(&request),
            Err(vec![RegistrationError::InvalidPhotoUrl])
        );
    }

    #[test]
    fn test_empty_photo_url_is_not_an_error() {
        let request = valid_request().with_photo_url("");
        assert!(validate_registration(&request).is_ok());
    }

    #[test]
    fn test_multiple_failures_reported_together() {
        let request = RegisterRequest::new("", "bad", "abc");
        let errors = validate_registration(&request).unwrap_err();
        assert_eq!(
            errors,
            vec![
                RegistrationError::MissingName,
                RegistrationError::InvalidEmail,
                RegistrationError::PasswordTooShort,
            ]
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn test_login_presence_checks() {
        assert!(validate_credentials(&LoginRequest::new("alice@example.com", "secret1")).is_ok());
        assert_eq!(
            validate_credentials(&LoginRequest::new("", "")),
            Err(vec![
                CredentialsError::MissingEmail,
                CredentialsError::MissingPassword,
            ])
        );
    }
}
