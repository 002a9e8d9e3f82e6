use serde::Serialize;

/// Aggregates over every salary entry of one company.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentSummary {
    pub total_payment: i64,
    pub average_payment: f64,
    pub max_payment: i64,
    pub min_payment: i64,
    pub total_entries: i64,
    pub total_work_done: i64,
    pub average_work_done: f64,
    pub max_work_done: i64,
    pub min_work_done: i64,
}
