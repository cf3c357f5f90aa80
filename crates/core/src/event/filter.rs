use chrono::NaiveDate;

use super::bucket::DateBucket;
use super::types::Event;

/// Listing criteria: a free-text title search combined with a date bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Case-insensitive substring matched against titles; empty matches all.
    pub search: String,
    pub bucket: DateBucket,
}

impl EventFilter {
    /// Creates a filter that matches every event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the date bucket.
    pub fn with_bucket(mut self, bucket: DateBucket) -> Self {
        self.bucket = bucket;
        self
    }

    /// Whether a single event satisfies both criteria.
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        title_contains(&event.title, &self.search) && self.bucket.contains(event.date, today)
    }
}

/// Filters the collection, keeping the source order.
///
/// Recomputed synchronously whenever the collection or criteria change;
/// ordering comes from the source collection, never from the filter.
pub fn filter_events<'a>(
    events: &'a [Event],
    filter: &EventFilter,
    today: NaiveDate,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| filter.matches(event, today))
        .collect()
}

fn title_contains(title: &str, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&search.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_event(id: &str, title: &str, date: NaiveDate) -> Event {
        Event::new(id, title, date, NaiveTime::from_hms_opt(10, 0, 0).unwrap())
    }

    fn reference() -> NaiveDate {
        make_date(2024, 6, 12)
    }

    fn sample_events() -> Vec<Event> {
        vec![
            make_event("1", "Tech Conference", make_date(2024, 6, 12)),
            make_event("2", "Music Fest", make_date(2024, 6, 14)),
            make_event("3", "Street Food Fair", make_date(2024, 6, 3)),
            make_event("4", "Art Conference", make_date(2024, 5, 20)),
        ]
    }

    fn ids<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|event| event.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let events = vec![
            make_event("1", "Tech Conference", reference()),
            make_event("2", "Music Fest", reference()),
        ];
        let filter = EventFilter::new().with_search("Conf");

        let filtered = filter_events(&events, &filter, reference());
        assert_eq!(ids(&filtered), ["1"]);

        let filter = EventFilter::new().with_search("mUsIc");
        let filtered = filter_events(&events, &filter, reference());
        assert_eq!(ids(&filtered), ["2"]);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let events = sample_events();
        let filtered = filter_events(&events, &EventFilter::new(), reference());
        assert_eq!(filtered.len(), events.len());
    }

    #[test]
    fn test_bucket_and_search_combine() {
        let events = sample_events();
        let filter = EventFilter::new()
            .with_search("Conference")
            .with_bucket(DateBucket::CurrentWeek);

        // "Art Conference" matches the search but sits in last month.
        let filtered = filter_events(&events, &filter, reference());
        assert_eq!(ids(&filtered), ["1"]);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let events = vec![
            make_event("z", "Meetup Two", make_date(2024, 6, 12)),
            make_event("a", "Meetup One", make_date(2024, 6, 13)),
            make_event("m", "Meetup Three", make_date(2024, 6, 14)),
        ];
        let filter = EventFilter::new().with_search("meetup");

        let filtered = filter_events(&events, &filter, reference());
        assert_eq!(ids(&filtered), ["z", "a", "m"]);
    }

    #[test]
    fn test_search_then_bucket_equals_bucket_then_search() {
        let events = sample_events();
        let today = reference();

        let search_only = EventFilter::new().with_search("f");
        let bucket_only = EventFilter::new().with_bucket(DateBucket::CurrentMonth);
        let combined = EventFilter::new()
            .with_search("f")
            .with_bucket(DateBucket::CurrentMonth);

        let search_first: Vec<&Event> = filter_events(&events, &search_only, today)
            .into_iter()
            .filter(|event| bucket_only.matches(event, today))
            .collect();
        let bucket_first: Vec<&Event> = filter_events(&events, &bucket_only, today)
            .into_iter()
            .filter(|event| search_only.matches(event, today))
            .collect();
        let one_pass = filter_events(&events, &combined, today);

        assert_eq!(ids(&search_first), ids(&one_pass));
        assert_eq!(ids(&bucket_first), ids(&one_pass));
    }
}
