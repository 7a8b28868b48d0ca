use crate::errors::AppResult;
use crate::models::punch::CheckInRecord;
use csv::Writer;
use std::path::Path;

/// Write punch records as CSV, one row per punch.
pub fn write_csv(path: &Path, records: &[CheckInRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "user_id",
        "user_name",
        "user_department",
        "type",
        "timestamp",
        "location",
        "lat",
        "lng",
    ])?;

    for rec in records {
        let (lat, lng) = match rec.coordinates {
            Some(c) => (c.lat.to_string(), c.lng.to_string()),
            None => (String::new(), String::new()),
        };

        wtr.write_record(&[
            rec.id.clone(),
            rec.user_id.clone(),
            rec.user_name.clone(),
            rec.user_department.clone(),
            rec.kind.pk_as_str().to_string(),
            rec.timestamp.to_rfc3339(),
            rec.location.clone(),
            lat,
            lng,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
