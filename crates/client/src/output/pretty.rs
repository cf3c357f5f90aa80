//! Pretty output formatting.

use eventy_core::auth::User;
use eventy_core::event::Event;

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    format!("{}\n  ID: {}\n  Email: {}", user.name, user.id, user.email)
}

/// Format an event for display.
///
/// When `viewer` is the id of the current user, events they already joined
/// are marked and events they created are labeled.
pub fn format_event(event: &Event, viewer: Option<&str>) -> String {
    let mut output = event.title.clone();
    if let Some(viewer) = viewer {
        if event.has_attendee(viewer) {
            output.push_str(" [joined]");
        }
        if event.is_created_by(viewer) {
            output.push_str(" [yours]");
        }
    }
    output.push_str(&format!(
        "\n  ID: {}\n  by {}\n  Date: {}\n  Time: {}\n  Location: {}\n  Attending: {}",
        event.id,
        event.name,
        event.date.format("%A, %B %-d, %Y"),
        event.time.format("%-I:%M %p"),
        event.location,
        event.attendee_count,
    ));
    if !event.description.is_empty() {
        output.push_str(&format!("\n  {}", event.description));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[&Event], viewer: Option<&str>) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let plural = if events.len() == 1 { "" } else { "s" };
    let mut output = format!("Showing {} event{}\n", events.len(), plural);
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event, viewer)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn sample_event() -> Event {
        Event::new(
            "ev-1",
            "Tech Conference",
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        )
        .with_organizer("Alice", "user-1")
        .with_location("Main Hall")
        .with_description("A full day of talks.")
        .with_attendees(vec!["user-2".to_string()])
    }

    #[test]
    fn test_format_event_renders_long_date_and_time() {
        let output = format_event(&sample_event(), None);
        assert!(output.contains("Monday, June 10, 2024"));
        assert!(output.contains("2:30 PM"));
        assert!(output.contains("Attending: 1"));
    }

    #[test]
    fn test_format_event_marks_viewer_state() {
        let event = sample_event();
        let joined = format_event(&event, Some("user-2"));
        assert!(joined.contains("[joined]"));

        let creator = format_event(&event, Some("user-1"));
        assert!(creator.contains("[yours]"));
        assert!(!creator.contains("[joined]"));
    }

    #[test]
    fn test_format_events_empty() {
        assert_eq!(format_events(&[], None), "No events found.");
    }

    #[test]
    fn test_format_events_counts() {
        let event = sample_event();
        let output = format_events(&[&event], None);
        assert!(output.starts_with("Showing 1 event\n"));
    }
}
