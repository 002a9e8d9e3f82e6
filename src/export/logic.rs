// src/export/logic.rs

use crate::core::salary::SalaryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::models::salary_entry::SalaryEntry;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub file: String,
    pub company: Option<String>,
    pub employee_id: Option<i64>,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the selected salary entries to `req.file`.
    ///
    /// Returns the output path and the number of entries written. Nothing
    /// is written when the selection is empty.
    pub fn export(pool: &mut DbPool, req: &ExportRequest) -> AppResult<(PathBuf, usize)> {
        let path = expand_tilde(&req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        let entries = select_entries(pool, req)?;
        if entries.is_empty() {
            return Ok((path, 0));
        }

        ensure_writable(&path, req.force)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match req.format {
            ExportFormat::Csv => export_csv(&entries, &path)?,
            ExportFormat::Json => export_json(&entries, &path)?,
        }

        Ok((path, entries.len()))
    }
}

fn select_entries(pool: &mut DbPool, req: &ExportRequest) -> AppResult<Vec<SalaryEntry>> {
    match (req.employee_id, req.company.as_deref()) {
        (Some(id), Some(company)) => SalaryLogic::list_employee_company(pool, id, company),
        (Some(id), None) => SalaryLogic::list_employee(pool, id),
        (None, Some(company)) => SalaryLogic::list_company(pool, company),
        (None, None) => Ok(SalaryLogic::list_all(pool)?
            .into_iter()
            .map(|e| e.entry)
            .collect()),
    }
}
