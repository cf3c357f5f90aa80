use thiserror::Error;

/// Field-level problems with an event submission.
///
/// Detected before anything is sent to the server; each value names the
/// offending field so the caller can surface it inline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventFieldError {
    #[error("Event title is required")]
    MissingTitle,
    #[error("Event date cannot be in the past")]
    PastDate,
    #[error("Event location is required")]
    MissingLocation,
    #[error("Event description is required")]
    MissingDescription,
    #[error("Description must be at least 10 characters long")]
    DescriptionTooShort,
}

impl EventFieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            EventFieldError::MissingTitle => "title",
            EventFieldError::PastDate => "date",
            EventFieldError::MissingLocation => "location",
            EventFieldError::MissingDescription | EventFieldError::DescriptionTooShort => {
                "description"
            }
        }
    }
}
