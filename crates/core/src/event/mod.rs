mod bucket;
mod error;
mod filter;
mod operations;
mod requests;
mod sorting;
mod types;

pub use bucket::DateBucket;
pub use error::EventFieldError;
pub use filter::{filter_events, EventFilter};
pub use operations::{events_created_by, validate_new_event};
pub use requests::{CreateEventRequest, UpdateEventRequest};
pub use sorting::sort_events_by_start;
pub use types::Event;
