use chrono::{Datelike, Days, NaiveDate};

/// Named date-range predicates used to filter the event listing.
///
/// Weeks run Sunday through Saturday. All range ends are inclusive and all
/// comparisons are calendar-date based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateBucket {
    /// No date filtering.
    #[default]
    All,
    Today,
    CurrentWeek,
    LastWeek,
    /// From the first day of the reference month onward, no upper bound.
    CurrentMonth,
    LastMonth,
}

impl DateBucket {
    /// The most recent Sunday on or before `date`.
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        let offset = u64::from(date.weekday().num_days_from_sunday());
        date - Days::new(offset)
    }

    /// Whether `date` falls inside this bucket relative to `today`.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateBucket::All => true,
            DateBucket::Today => date == today,
            DateBucket::CurrentWeek => {
                let start = Self::week_start(today);
                date >= start && date <= start + Days::new(6)
            }
            DateBucket::LastWeek => {
                let start = Self::week_start(today) - Days::new(7);
                date >= start && date <= start + Days::new(6)
            }
            DateBucket::CurrentMonth => date >= first_of_month(today),
            DateBucket::LastMonth => match first_of_month(today).pred_opt() {
                Some(end) => date >= first_of_month(end) && date <= end,
                None => false,
            },
        }
    }

    /// The identifier used on the CLI and in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            DateBucket::All => "all",
            DateBucket::Today => "today",
            DateBucket::CurrentWeek => "current-week",
            DateBucket::LastWeek => "last-week",
            DateBucket::CurrentMonth => "current-month",
            DateBucket::LastMonth => "last-month",
        }
    }
}

impl std::fmt::Display for DateBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// First calendar day of `date`'s month.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
