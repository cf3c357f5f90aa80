use super::types::Event;

/// Sorts events by their combined (date, time) start, most recent first.
///
/// The sort is stable: events with identical date and time keep their input
/// order. Applied once to each fetched collection; filtering never resorts.
pub fn sort_events_by_start(events: &mut [Event]) {
    events.sort_by(|a, b| b.starts_at().cmp(&a.starts_at()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_event(id: &str, date: (i32, u32, u32), time: (u32, u32)) -> Event {
        Event::new(
            id,
            format!("Event {id}"),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
        )
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|event| event.id.as_str()).collect()
    }

    #[test]
    fn test_most_recent_first() {
        let mut events = vec![
            make_event("old", (2024, 5, 1), (12, 0)),
            make_event("new", (2024, 7, 1), (12, 0)),
            make_event("mid", (2024, 6, 1), (12, 0)),
        ];

        sort_events_by_start(&mut events);
        assert_eq!(ids(&events), ["new", "mid", "old"]);
    }

    #[test]
    fn test_same_date_later_time_first() {
        let mut events = vec![
            make_event("2", (2024, 6, 10), (9, 0)),
            make_event("1", (2024, 6, 10), (10, 0)),
        ];

        sort_events_by_start(&mut events);
        assert_eq!(ids(&events), ["1", "2"]);
    }

    #[test]
    fn test_identical_start_keeps_input_order() {
        let mut events = vec![
            make_event("a", (2024, 6, 10), (10, 0)),
            make_event("b", (2024, 6, 10), (10, 0)),
            make_event("c", (2024, 6, 10), (10, 0)),
        ];

        sort_events_by_start(&mut events);
        assert_eq!(ids(&events), ["a", "b", "c"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut events = vec![
            make_event("b", (2024, 6, 10), (9, 0)),
            make_event("a", (2024, 6, 10), (10, 0)),
            make_event("c", (2024, 6, 9), (23, 59)),
        ];

        sort_events_by_start(&mut events);
        let once = events.clone();
        sort_events_by_start(&mut events);
        assert_eq!(events, once);
    }
}
