use crate::errors::AppResult;
use crate::models::salary_entry::SalaryEntry;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed array; list columns stay real JSON arrays.
pub(crate) fn export_json(entries: &[SalaryEntry], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(entries)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}
