use crate::errors::AppResult;
use crate::export::model::SalaryExport;
use crate::models::salary_entry::SalaryEntry;
use std::path::Path;

/// Header row comes from the field names of [`SalaryExport`].
pub(crate) fn export_csv(entries: &[SalaryEntry], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for entry in entries {
        wtr.serialize(SalaryExport::from_entry(entry)?)?;
    }

    wtr.flush()?;
    Ok(())
}
