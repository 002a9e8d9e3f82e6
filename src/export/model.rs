// src/export/model.rs

use crate::errors::AppResult;
use crate::models::list_codec::encode_list;
use crate::models::salary_entry::SalaryEntry;
use serde::Serialize;

/// Flat projection of a salary entry for CSV; list columns keep their
/// stored JSON text so a row survives a spreadsheet round trip.
#[derive(Serialize, Clone, Debug)]
pub struct SalaryExport {
    pub salary_entry_id: i64,
    pub record_date: String,
    pub employee_id: i64,
    pub company: String,
    pub type_of_payment: String,
    pub mode_of_payment: String,
    pub payment: i64,
    pub work_done: i64,
    pub work_ids: String,
    pub costs: String,
    pub quantities: String,
    pub created_at: String,
}

impl SalaryExport {
    pub fn from_entry(e: &SalaryEntry) -> AppResult<Self> {
        Ok(Self {
            salary_entry_id: e.salary_entry_id,
            record_date: e.record_date.clone(),
            employee_id: e.employee_id,
            company: e.company.clone(),
            type_of_payment: e.type_of_payment.to_db_str().to_string(),
            mode_of_payment: e.mode_of_payment.clone().unwrap_or_default(),
            payment: e.payment,
            work_done: e.work_done,
            work_ids: encode_list(&e.work_ids)?,
            costs: encode_list(&e.costs)?,
            quantities: encode_list(&e.quantities)?,
            created_at: e.created_at.clone(),
        })
    }
}
