use chrono::NaiveDate;

use super::error::EventFieldError;
use super::requests::CreateEventRequest;
use super::types::Event;

/// Validates a create request before it is submitted.
///
/// `today` is the caller's reference date; an event on `today` itself is
/// allowed. Failures cover every offending field, not just the first one.
pub fn validate_new_event(
    request: &CreateEventRequest,
    today: NaiveDate,
) -> Result<(), Vec<EventFieldError>> {
    let mut errors = Vec::new();

    if request.title.trim().is_empty() {
        errors.push(EventFieldError::MissingTitle);
    }
    if request.date < today {
        errors.push(EventFieldError::PastDate);
    }
    if request.location.trim().is_empty() {
        errors.push(EventFieldError::MissingLocation);
    }
    let description = request.description.trim();
    if description.is_empty() {
        errors.push(EventFieldError::MissingDescription);
    } else if description.chars().count() < 10 {
        errors.push(EventFieldError::DescriptionTooShort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Events created by the given user, in source order.
pub fn events_created_by<'a>(events: &'a [Event], user_id: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.is_created_by(user_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn valid_request() -> CreateEventRequest {
        CreateEventRequest::new(
            "Tech Conference",
            make_date(2024, 6, 10),
            make_time(10, 0),
            "Main Hall",
            "A full day of talks.",
        )
    }

    fn today() -> NaiveDate {
        make_date(2024, 6, 1)
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_new_event(&valid_request(), today()).is_ok());
    }

    #[test]
    fn test_event_on_today_is_allowed() {
        let mut request = valid_request();
        request.date = today();
        assert!(validate_new_event(&request, today()).is_ok());
    }

    #[test]
    fn test_past_date_rejected() {
        let mut request = valid_request();
        request.date = make_date(2024, 5, 31);
        assert_eq!(
            validate_new_event(&request, today()),
            Err(vec![EventFieldError::PastDate])
        );
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut request = valid_request();
        request.title = "   ".to_string();
        assert_eq!(
            validate_new_event(&request, today()),
            Err(vec![EventFieldError::MissingTitle])
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let mut request = valid_request();
        request.description = "too short".to_string();
        assert_eq!(
            validate_new_event(&request, today()),
            Err(vec![EventFieldError::DescriptionTooShort])
        );
    }

    #[test]
    fn test_all_failing_fields_reported() {
        let mut request = valid_request();
        request.title = String::new();
        request.location = String::new();
        request.description = String::new();

        let errors = validate_new_event(&request, today()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                EventFieldError::MissingTitle,
                EventFieldError::MissingLocation,
                EventFieldError::MissingDescription,
            ]
        );
    }

    #[test]
    fn test_events_created_by_keeps_order() {
        let date = make_date(2024, 6, 10);
        let time = make_time(10, 0);
        let events = vec![
            Event::new("1", "First", date, time).with_organizer("Alice", "user-1"),
            Event::new("2", "Second", date, time).with_organizer("Bob", "user-2"),
            Event::new("3", "Third", date, time).with_organizer("Alice", "user-1"),
        ];

        let mine = events_created_by(&events, "user-1");
        let ids: Vec<&str> = mine.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
