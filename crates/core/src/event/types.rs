use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A community event as served by the events API.
///
/// Identifier formats are owned by the server; ids are carried as opaque
/// strings. Wire field names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Organizer display name.
    pub name: String,
    /// Organizer user id.
    pub user_id: String,
    /// Calendar date, no time component.
    pub date: NaiveDate,
    /// Local time of day; combined with `date` only for ordering.
    #[serde(with = "crate::serde::hour_minute")]
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    /// Denormalized attendee count, maintained by the server.
    #[serde(default)]
    pub attendee_count: u32,
    /// Unique ids of users who joined; order is irrelevant.
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Event {
    /// Creates an event with the given title, date, and time; remaining
    /// fields get placeholder values.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            name: String::new(),
            user_id: String::new(),
            date,
            time,
            location: String::new(),
            description: String::new(),
            attendee_count: 0,
            attendees: Vec::new(),
        }
    }

    /// Sets the organizer name and user id.
    pub fn with_organizer(mut self, name: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.name = name.into();
        self.user_id = user_id.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the attendee set, keeping the denormalized count in step.
    pub fn with_attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendee_count = attendees.len() as u32;
        self.attendees = attendees;
        self
    }

    /// Combined start instant used for ordering.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Whether the given user already joined this event.
    pub fn has_attendee(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|id| id == user_id)
    }

    /// Whether the given user created this event.
    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_event_builder() {
        let event = Event::new("ev-1", "Tech Conference", make_date(2024, 6, 10), make_time(10, 0))
            .with_organizer("Alice", "user-1")
            .with_location("Main Hall")
            .with_description("A full day of talks.")
            .with_attendees(vec!["user-2".to_string(), "user-3".to_string()]);

        assert_eq!(event.title, "Tech Conference");
        assert_eq!(event.name, "Alice");
        assert_eq!(event.user_id, "user-1");
        assert_eq!(event.attendee_count, 2);
        assert!(event.has_attendee("user-2"));
        assert!(!event.has_attendee("user-1"));
        assert!(event.is_created_by("user-1"));
    }

    #[test]
    fn test_starts_at_combines_date_and_time() {
        let event = Event::new("ev-1", "Standup", make_date(2024, 6, 10), make_time(9, 30));
        assert_eq!(
            event.starts_at(),
            make_date(2024, 6, 10).and_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "id": "ev-42",
            "title": "Music Fest",
            "name": "Bob",
            "userId": "user-7",
            "date": "2024-06-10",
            "time": "18:00",
            "location": "City Park",
            "description": "An evening of live music.",
            "attendeeCount": 1,
            "attendees": ["user-9"]
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.user_id, "user-7");
        assert_eq!(event.time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(event.attendee_count, 1);
        assert_eq!(event.attendees, vec!["user-9".to_string()]);
    }

    #[test]
    fn test_deserialize_missing_attendee_fields() {
        let json = r#"{
            "id": "ev-42",
            "title": "Music Fest",
            "name": "Bob",
            "userId": "user-7",
            "date": "2024-06-10",
            "time": "18:00:30",
            "location": "City Park",
            "description": "An evening of live music."
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.attendee_count, 0);
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let event = Event::new("ev-1", "Standup", make_date(2024, 6, 10), make_time(9, 30))
            .with_organizer("Alice", "user-1");
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""userId":"user-1""#));
        assert!(json.contains(r#""attendeeCount":0"#));
        assert!(json.contains(r#""time":"09:30""#));
    }
}
