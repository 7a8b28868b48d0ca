//! Punch sequencer properties: the fixed workday cycle and the
//! "last punch today" lookup.

use chrono::{Local, NaiveDate, TimeZone};
use ponto::core::sequencer::{last_punch_on, next_for_user, next_kind};
use ponto::models::punch::{CheckInRecord, PunchKind};

fn record(user_id: &str, y: i32, mo: u32, d: u32, h: u32, mi: u32, kind: PunchKind) -> CheckInRecord {
    let ts = Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    CheckInRecord {
        id: format!("{user_id}-{ts}"),
        user_id: user_id.to_string(),
        user_name: "Test User".to_string(),
        user_department: "Engineering".to_string(),
        kind,
        timestamp: ts,
        location: "Escritório Principal".to_string(),
        coordinates: None,
    }
}

#[test]
fn test_cycle_table() {
    assert_eq!(next_kind(None), PunchKind::In);
    assert_eq!(next_kind(Some(PunchKind::In)), PunchKind::LunchStart);
    assert_eq!(next_kind(Some(PunchKind::LunchStart)), PunchKind::LunchEnd);
    assert_eq!(next_kind(Some(PunchKind::LunchEnd)), PunchKind::Out);
    assert_eq!(next_kind(Some(PunchKind::Out)), PunchKind::In);
}

#[test]
fn test_four_applications_return_to_in() {
    let mut kind = next_kind(None);
    assert_eq!(kind, PunchKind::In);
    for _ in 0..4 {
        kind = next_kind(Some(kind));
    }
    assert_eq!(kind, PunchKind::In);
}

#[test]
fn test_last_punch_ignores_record_order() {
    // records deliberately out of chronological order
    let records = vec![
        record("2", 2026, 3, 2, 12, 5, PunchKind::LunchStart),
        record("2", 2026, 3, 2, 8, 10, PunchKind::In),
    ];
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let last = last_punch_on(&records, "2", day).unwrap();
    assert_eq!(last.kind, PunchKind::LunchStart);
    assert_eq!(next_for_user(&records, "2", day), PunchKind::LunchEnd);
}

#[test]
fn test_last_punch_filters_user_and_day() {
    let records = vec![
        record("2", 2026, 3, 1, 17, 30, PunchKind::Out), // previous day
        record("3", 2026, 3, 2, 12, 0, PunchKind::LunchStart), // other user
        record("2", 2026, 3, 2, 8, 0, PunchKind::In),
    ];
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let last = last_punch_on(&records, "2", day).unwrap();
    assert_eq!(last.kind, PunchKind::In);
}

#[test]
fn test_no_records_today_proposes_in() {
    let records = vec![record("2", 2026, 3, 1, 17, 30, PunchKind::Out)];
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    assert!(last_punch_on(&records, "2", day).is_none());
    assert_eq!(next_for_user(&records, "2", day), PunchKind::In);
}

#[test]
fn test_full_day_cycle_resets_next_morning() {
    let records = vec![
        record("2", 2026, 3, 2, 8, 0, PunchKind::In),
        record("2", 2026, 3, 2, 12, 1, PunchKind::LunchStart),
        record("2", 2026, 3, 2, 13, 2, PunchKind::LunchEnd),
        record("2", 2026, 3, 2, 17, 45, PunchKind::Out),
    ];

    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();

    // full cycle closed: the next proposal wraps back to "in"
    assert_eq!(next_for_user(&records, "2", monday), PunchKind::In);
    // and a fresh day starts at "in" as well
    assert_eq!(next_for_user(&records, "2", tuesday), PunchKind::In);
}
