use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The trailing week: six days ago up to and including `today`, oldest first.
pub fn trailing_week(today: NaiveDate) -> Vec<NaiveDate> {
    (0..7).rev().map(|d| today - Duration::days(d)).collect()
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekdays within the trailing week (the days the mock generator covers).
pub fn trailing_weekdays(today: NaiveDate) -> Vec<NaiveDate> {
    trailing_week(today)
        .into_iter()
        .filter(|d| !is_weekend(*d))
        .collect()
}
