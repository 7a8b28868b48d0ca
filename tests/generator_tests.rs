//! Record generator invariants: counts, minute windows, ordering and ids.
//! Values are random, so assertions target ranges and structure, not exact
//! times — except for the determinism check with a fixed seed.

use chrono::{NaiveDate, Timelike};
use ponto::core::generator::{
    IN_WINDOW, LUNCH_END_WINDOW, LUNCH_START_WINDOW, OUT_WINDOW, for_user, generate_week,
};
use ponto::models::punch::PunchKind;
use ponto::models::seed::default_users;
use rand::SeedableRng;
use rand::rngs::StdRng;

const LOCATION: &str = "Escritório Principal";

fn fixed_today() -> NaiveDate {
    // a Friday; the trailing week spans Sat 01 .. Fri 07
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

#[test]
fn test_record_count() {
    let users = default_users();
    let mut rng = StdRng::seed_from_u64(42);
    let records = generate_week(&mut rng, fixed_today(), &users, LOCATION);

    // any 7 consecutive days contain exactly 5 weekdays;
    // 4 punches × 5 weekdays × 4 non-admin users
    assert_eq!(records.len(), 4 * 5 * 4);
}

#[test]
fn test_admin_has_no_records() {
    let users = default_users();
    let mut rng = StdRng::seed_from_u64(7);
    let records = generate_week(&mut rng, fixed_today(), &users, LOCATION);

    let admin = users.iter().find(|u| u.is_admin()).unwrap();
    assert!(for_user(&records, &admin.id).is_empty());
}

#[test]
fn test_weekends_are_skipped() {
    let users = default_users();
    let mut rng = StdRng::seed_from_u64(7);
    let records = generate_week(&mut rng, fixed_today(), &users, LOCATION);

    let sat = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let sun = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();
    assert!(records.iter().all(|r| r.date() != sat && r.date() != sun));
}

#[test]
fn test_minute_windows() {
    let users = default_users();
    let mut rng = StdRng::seed_from_u64(1234);
    let records = generate_week(&mut rng, fixed_today(), &users, LOCATION);

    for rec in &records {
        let t = rec.timestamp.time();
        let minute = t.hour() * 60 + t.minute();
        let window = match rec.kind {
            PunchKind::In => IN_WINDOW,
            PunchKind::LunchStart => LUNCH_START_WINDOW,
            PunchKind::LunchEnd => LUNCH_END_WINDOW,
            PunchKind::Out => OUT_WINDOW,
        };
        assert!(
            window.contains(&minute),
            "{} at {} outside window {:?}",
            rec.kind.pk_as_str(),
            t,
            window
        );
        assert_eq!(t.second(), 0);
    }
}

#[test]
fn test_sorted_by_timestamp_descending() {
    let users = default_users();
    let mut rng = StdRng::seed_from_u64(99);
    let records = generate_week(&mut rng, fixed_today(), &users, LOCATION);

    assert!(
        records
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp)
    );
}

#[test]
fn test_deterministic_id_shape() {
    let users = default_users();
    let mut rng = StdRng::seed_from_u64(5);
    let records = generate_week(&mut rng, fixed_today(), &users, LOCATION);

    let john_friday_in = records
        .iter()
        .find(|r| r.user_id == "2" && r.date() == fixed_today() && r.kind == PunchKind::In)
        .unwrap();
    assert_eq!(john_friday_in.id, "2-2026-08-07-in");

    let lunch = records
        .iter()
        .find(|r| r.user_id == "3" && r.kind == PunchKind::LunchStart)
        .unwrap();
    assert!(lunch.id.ends_with("-lunch-start"));

    // ids are unique across the whole set
    let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn test_denormalized_user_snapshot() {
    let users = default_users();
    let mut rng = StdRng::seed_from_u64(5);
    let records = generate_week(&mut rng, fixed_today(), &users, LOCATION);

    let rec = records.iter().find(|r| r.user_id == "2").unwrap();
    assert_eq!(rec.user_name, "John Doe");
    assert_eq!(rec.user_department, "Engineering");
    assert_eq!(rec.location, LOCATION);
}

#[test]
fn test_same_seed_same_output() {
    let users = default_users();

    let a = generate_week(&mut StdRng::seed_from_u64(42), fixed_today(), &users, LOCATION);
    let b = generate_week(&mut StdRng::seed_from_u64(42), fixed_today(), &users, LOCATION);

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.timestamp, y.timestamp);
    }
}
