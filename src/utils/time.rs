//! Time utilities: parsing HH:MM, duration computations, formatting minutes.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

/// `135` → `"02h 15m"`.
pub fn mins2readable(mins: i64) -> String {
    let m = mins.abs();
    format!("{:02}h {:02}m", m / 60, m % 60)
}
