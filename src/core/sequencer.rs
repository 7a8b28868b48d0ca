//! Punch sequencer: given the most recent punch of the current calendar day
//! (or none), decide the single next allowed punch type.

use crate::models::punch::{CheckInRecord, PunchKind};
use chrono::NaiveDate;

/// The workday cycle. Total over the enum, no error cases:
/// absent → in → lunch_start → lunch_end → out → in.
pub fn next_kind(last: Option<PunchKind>) -> PunchKind {
    match last {
        None | Some(PunchKind::Out) => PunchKind::In,
        Some(PunchKind::In) => PunchKind::LunchStart,
        Some(PunchKind::LunchStart) => PunchKind::LunchEnd,
        Some(PunchKind::LunchEnd) => PunchKind::Out,
    }
}

/// Most recent punch of `user_id` on `day`, regardless of the order the
/// records were produced in. Ties on identical timestamps keep the
/// latest-encountered record.
pub fn last_punch_on<'a>(
    records: &'a [CheckInRecord],
    user_id: &str,
    day: NaiveDate,
) -> Option<&'a CheckInRecord> {
    records
        .iter()
        .filter(|r| r.user_id == user_id && r.date() == day)
        .max_by_key(|r| r.timestamp)
}

/// Next punch type for `user_id` on `day`, derived from the record set.
pub fn next_for_user(records: &[CheckInRecord], user_id: &str, day: NaiveDate) -> PunchKind {
    next_kind(last_punch_on(records, user_id, day).map(|r| r.kind))
}
