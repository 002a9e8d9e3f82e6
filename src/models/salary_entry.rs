use super::payment_type::PaymentType;
use chrono::NaiveDate;
use serde::Serialize;

/// Row of the `salaries` table with list columns decoded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalaryEntry {
    pub salary_entry_id: i64,
    pub payment: i64,
    pub record_date: String,
    pub employee_id: i64,
    pub type_of_payment: PaymentType,
    pub mode_of_payment: Option<String>,
    pub company: String,
    pub work_ids: Vec<i64>,
    pub costs: Vec<i64>,
    pub quantities: Vec<i64>,
    pub work_done: i64,
    pub created_at: String,
}

/// Salary entry joined with the names of its works (unfiltered listing).
///
/// `work_names[i]` and `bus_types[i]` describe the i-th *resolvable* id of
/// `work_ids`; ids without a matching work are skipped.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalaryEntryWithWorks {
    #[serde(flatten)]
    pub entry: SalaryEntry,
    pub work_names: Vec<String>,
    pub bus_types: Vec<String>,
}

/// A proposed entry, before validation.
#[derive(Debug, Clone)]
pub struct SalaryEntryInput {
    pub payment: i64,
    pub record_date: NaiveDate,
    pub employee_id: i64,
    pub type_of_payment: PaymentType,
    pub mode_of_payment: Option<String>,
    pub company: String,
    pub work_ids: Vec<i64>,
    pub costs: Vec<i64>,
    pub quantities: Vec<i64>,
}

/// An entry that passed every check, ready for a single write.
#[derive(Debug, Clone)]
pub struct ValidatedEntry {
    pub input: SalaryEntryInput,
    pub work_done: i64,
}
