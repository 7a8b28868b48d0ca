//! Mock punch-record generator: a trailing week of plausible check-ins for
//! every non-admin user, weekends skipped. The random source is injected so
//! tests can seed it; production callers pass `rand::thread_rng()`.

use crate::models::punch::{CheckInRecord, PunchKind};
use crate::models::user::User;
use crate::utils::date::trailing_weekdays;
use chrono::{Local, NaiveDate, NaiveTime};
use rand::Rng;
use std::ops::Range;

// Minute-of-day windows for each punch type.
pub const IN_WINDOW: Range<u32> = 465..555; // [07:45, 09:15)
pub const LUNCH_START_WINDOW: Range<u32> = 720..735; // [12:00, 12:15)
pub const LUNCH_END_WINDOW: Range<u32> = 780..795; // [13:00, 13:15)
pub const OUT_WINDOW: Range<u32> = 1020..1110; // [17:00, 18:30)

const DAY_CYCLE: [(PunchKind, Range<u32>); 4] = [
    (PunchKind::In, IN_WINDOW),
    (PunchKind::LunchStart, LUNCH_START_WINDOW),
    (PunchKind::LunchEnd, LUNCH_END_WINDOW),
    (PunchKind::Out, OUT_WINDOW),
];

/// Generate the demo history: 4 punches per (non-admin user, weekday within
/// today and the 6 prior days), sorted by timestamp descending. Consumers
/// rely on that ordering for "last punch" lookups.
pub fn generate_week<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    users: &[User],
    location: &str,
) -> Vec<CheckInRecord> {
    let mut records = Vec::new();

    for user in users.iter().filter(|u| !u.is_admin()) {
        for day in trailing_weekdays(today) {
            for (kind, window) in DAY_CYCLE {
                let minute = rng.gen_range(window);
                records.push(mock_record(user, day, kind, minute, location));
            }
        }
    }

    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records
}

/// One synthetic punch. Id is deterministic per (user, day, type):
/// `{userId}-{YYYY-MM-DD}-{suffix}`.
fn mock_record(
    user: &User,
    day: NaiveDate,
    kind: PunchKind,
    minute_of_day: u32,
    location: &str,
) -> CheckInRecord {
    let time = NaiveTime::from_num_seconds_from_midnight_opt(minute_of_day * 60, 0).unwrap();
    let timestamp = day.and_time(time).and_local_timezone(Local).unwrap();

    CheckInRecord {
        id: format!("{}-{}-{}", user.id, day.format("%Y-%m-%d"), kind.id_suffix()),
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        user_department: user.department.clone(),
        kind,
        timestamp,
        location: location.to_string(),
        coordinates: None,
    }
}

/// Records belonging to one user, preserving the input ordering.
pub fn for_user(records: &[CheckInRecord], user_id: &str) -> Vec<CheckInRecord> {
    records
        .iter()
        .filter(|r| r.user_id == user_id)
        .cloned()
        .collect()
}
