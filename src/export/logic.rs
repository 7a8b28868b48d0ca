use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::models::punch::CheckInRecord;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `file` in the requested format.
    /// `~` is expanded; an existing file is only replaced with `force`.
    pub fn export(
        records: &[CheckInRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => write_csv(&path, records)?,
            ExportFormat::Json => write_json(&path, records)?,
        }

        messages::success(format!(
            "Exported {} record(s) to {}",
            records.len(),
            path.display()
        ));
        Ok(())
    }
}
