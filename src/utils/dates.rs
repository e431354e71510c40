//! Event date helpers
//!
//! Backend events carry their date as a `DD-MM-YYYY` string. All "is this
//! event in the past" decisions compare at calendar-day granularity against
//! the local date, never at timestamp precision.

use chrono::{Local, NaiveDate};

/// Wire format used by the backend for event dates
pub const EVENT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a backend event date string
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), EVENT_DATE_FORMAT).ok()
}

/// Whether the given date string falls on or after today's local date.
/// Unparseable dates are treated as past (they never show up in listings).
pub fn is_on_or_after_today(raw: &str) -> bool {
    match parse_event_date(raw) {
        Some(date) => date >= Local::now().date_naive(),
        None => false,
    }
}

/// Upcoming filter for the general event listing: an event without a
/// parseable date is dropped.
pub fn listing_is_upcoming(date: Option<&str>) -> bool {
    date.map(is_on_or_after_today).unwrap_or(false)
}

/// Upcoming filter for the registered-events view: a resolved registration
/// without a date is kept rather than silently hidden.
pub fn registration_is_upcoming(date: Option<&str>) -> bool {
    date.map(is_on_or_after_today).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fmt(date: NaiveDate) -> String {
        date.format(EVENT_DATE_FORMAT).to_string()
    }

    #[test]
    fn test_parse_event_date() {
        assert_eq!(
            parse_event_date("25-12-2030"),
            NaiveDate::from_ymd_opt(2030, 12, 25)
        );
        assert_eq!(parse_event_date("2030-12-25"), None);
        assert_eq!(parse_event_date("not a date"), None);
    }

    #[test]
    fn test_today_counts_as_upcoming() {
        let today = Local::now().date_naive();
        assert!(is_on_or_after_today(&fmt(today)));
    }

    #[test]
    fn test_yesterday_is_past() {
        let yesterday = Local::now().date_naive() - Duration::days(1);
        assert!(!is_on_or_after_today(&fmt(yesterday)));
    }

    #[test]
    fn test_tomorrow_is_upcoming() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        assert!(is_on_or_after_today(&fmt(tomorrow)));
    }

    #[test]
    fn test_missing_date_policies_differ() {
        assert!(!listing_is_upcoming(None));
        assert!(registration_is_upcoming(None));
        assert!(!listing_is_upcoming(Some("garbage")));
        assert!(!registration_is_upcoming(Some("garbage")));
    }
}
