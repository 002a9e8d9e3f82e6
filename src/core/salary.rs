//! Salary entry pipeline.
//!
//! A proposed entry is resolved against companies and employees, its
//! `work_done` is derived from the cost/quantity vectors, the advance rule is
//! applied, and only then is a single row written. Every check and the write
//! share one transaction, so a rejected entry leaves no trace.

use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::companies::company_exists;
use crate::db::queries::employees::employee_exists;
use crate::db::queries::salaries::{self as q, SalaryFilter};
use crate::db::queries::works::load_works_brief;
use crate::errors::{AppError, AppResult};
use crate::models::salary_entry::{
    SalaryEntry, SalaryEntryInput, SalaryEntryWithWorks, ValidatedEntry,
};
use crate::models::work::WorkBrief;
use crate::utils::time::created_at_stamp;
use chrono::FixedOffset;
use rusqlite::Connection;
use std::collections::HashMap;

/// Where the "advance entries carry no work" rule applies.
///
/// Inserts have always enforced it; updates historically did not, so the
/// update path is off unless configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceRule {
    pub on_insert: bool,
    pub on_update: bool,
}

impl Default for AdvanceRule {
    fn default() -> Self {
        Self {
            on_insert: true,
            on_update: false,
        }
    }
}

impl From<&Config> for AdvanceRule {
    fn from(cfg: &Config) -> Self {
        Self {
            on_insert: cfg.advance_check_on_insert,
            on_update: cfg.advance_check_on_update,
        }
    }
}

/// Σ costs[i] · quantities[i] over the whole vectors.
pub fn compute_work_done(costs: &[i64], quantities: &[i64]) -> AppResult<i64> {
    if costs.len() != quantities.len() {
        return Err(AppError::MismatchedVectorLength {
            costs: costs.len(),
            quantities: quantities.len(),
        });
    }

    costs
        .iter()
        .zip(quantities)
        .try_fold(0i64, |acc, (c, q)| c.checked_mul(*q).and_then(|p| acc.checked_add(p)))
        .ok_or_else(|| AppError::InvalidInput("work done overflows a 64-bit amount".into()))
}

/// Resolve references and derive `work_done`.
///
/// Order of checks: company, employee, vector lengths, advance rule.
pub fn validate_entry(
    conn: &Connection,
    input: SalaryEntryInput,
    check_advance: bool,
) -> AppResult<ValidatedEntry> {
    if !company_exists(conn, &input.company)? {
        return Err(AppError::UnknownCompany(input.company.clone()));
    }
    if !employee_exists(conn, input.employee_id)? {
        return Err(AppError::UnknownEmployee(input.employee_id));
    }

    let work_done = compute_work_done(&input.costs, &input.quantities)?;

    if check_advance && input.type_of_payment.is_advance() && work_done != 0 {
        return Err(AppError::InvalidAdvanceEntry(work_done));
    }

    Ok(ValidatedEntry { input, work_done })
}

/// Attach work names and bus types to each entry, in `work_ids` order.
///
/// Ids with no matching work are skipped; every entry is kept, even when
/// none of its ids resolve.
pub fn attach_work_names(
    entries: Vec<SalaryEntry>,
    works: &[WorkBrief],
) -> Vec<SalaryEntryWithWorks> {
    let by_id: HashMap<i64, &WorkBrief> = works.iter().map(|w| (w.work_id, w)).collect();

    entries
        .into_iter()
        .map(|entry| {
            let (work_names, bus_types) = entry
                .work_ids
                .iter()
                .filter_map(|id| by_id.get(id))
                .map(|w| (w.work_name.clone(), w.bus_type.clone()))
                .unzip();

            SalaryEntryWithWorks {
                entry,
                work_names,
                bus_types,
            }
        })
        .collect()
}

pub struct SalaryLogic;

impl SalaryLogic {
    /// Validate and insert a new entry; returns its id.
    pub fn add(
        pool: &mut DbPool,
        input: SalaryEntryInput,
        rule: AdvanceRule,
        offset: &FixedOffset,
    ) -> AppResult<i64> {
        pool.with_tx(|tx| {
            let valid = validate_entry(tx, input, rule.on_insert)?;
            let id = q::insert_salary(tx, &valid, &created_at_stamp(offset))?;

            audit(
                tx,
                "add",
                &format!("salary #{}", id),
                &format!(
                    "employee {} / {} / {} paid {} work done {}",
                    valid.input.employee_id,
                    valid.input.company,
                    valid.input.type_of_payment,
                    valid.input.payment,
                    valid.work_done
                ),
            );
            Ok(id)
        })
    }

    /// Re-validate and overwrite an existing entry.
    ///
    /// The id is checked before anything else. The advance rule runs only
    /// when `rule.on_update` is set.
    pub fn update(
        pool: &mut DbPool,
        id: i64,
        input: SalaryEntryInput,
        rule: AdvanceRule,
    ) -> AppResult<i64> {
        pool.with_tx(|tx| {
            if !q::salary_exists(tx, id)? {
                return Err(AppError::UnknownSalaryEntry(id));
            }

            let valid = validate_entry(tx, input, rule.on_update)?;
            q::update_salary(tx, id, &valid)?;

            audit(
                tx,
                "edit",
                &format!("salary #{}", id),
                &format!("work done {}", valid.work_done),
            );
            Ok(valid.work_done)
        })
    }

    /// Delete by (employee, entry) pair. Returns the number of rows removed,
    /// which is 0 when nothing matched.
    pub fn delete(pool: &mut DbPool, employee_id: i64, salary_entry_id: i64) -> AppResult<usize> {
        pool.with_tx(|tx| {
            let n = q::delete_salary(tx, employee_id, salary_entry_id)?;
            if n > 0 {
                audit(
                    tx,
                    "del",
                    &format!("salary #{}", salary_entry_id),
                    &format!("employee {}", employee_id),
                );
            }
            Ok(n)
        })
    }

    pub fn get(pool: &mut DbPool, id: i64) -> AppResult<Option<SalaryEntry>> {
        q::find_salary(&pool.conn, id)
    }

    /// Every entry, decorated with the names of its works.
    pub fn list_all(pool: &mut DbPool) -> AppResult<Vec<SalaryEntryWithWorks>> {
        let entries = q::load_salaries(&pool.conn, &SalaryFilter::default())?;
        let works = load_works_brief(&pool.conn)?;
        Ok(attach_work_names(entries, &works))
    }

    pub fn list_company(pool: &mut DbPool, company: &str) -> AppResult<Vec<SalaryEntry>> {
        let filter = SalaryFilter {
            company: Some(company.to_string()),
            ..SalaryFilter::default()
        };
        q::load_salaries(&pool.conn, &filter)
    }

    pub fn list_employee(pool: &mut DbPool, employee_id: i64) -> AppResult<Vec<SalaryEntry>> {
        let filter = SalaryFilter {
            employee_id: Some(employee_id),
            ..SalaryFilter::default()
        };
        q::load_salaries(&pool.conn, &filter)
    }

    pub fn list_employee_company(
        pool: &mut DbPool,
        employee_id: i64,
        company: &str,
    ) -> AppResult<Vec<SalaryEntry>> {
        let filter = SalaryFilter {
            employee_id: Some(employee_id),
            company: Some(company.to_string()),
        };
        q::load_salaries(&pool.conn, &filter)
    }
}
