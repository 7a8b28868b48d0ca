use crate::errors::AppResult;
use crate::models::punch::CheckInRecord;
use std::path::Path;

/// Write punch records as pretty-printed JSON.
pub fn write_json(path: &Path, records: &[CheckInRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
