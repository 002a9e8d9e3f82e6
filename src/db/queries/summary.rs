use crate::errors::AppResult;
use crate::models::summary::PaymentSummary;
use rusqlite::{Connection, params};

/// One aggregate pass over the salary entries of `company`.
/// `None` when the company has no entries at all.
pub fn payment_summary(conn: &Connection, company: &str) -> AppResult<Option<PaymentSummary>> {
    let summary = conn.query_row(
        "SELECT COUNT(*),
                SUM(payment), AVG(payment), MAX(payment), MIN(payment),
                SUM(work_done), AVG(work_done), MAX(work_done), MIN(work_done)
         FROM salaries
         WHERE company = ?1",
        params![company],
        |row| {
            let total_entries: i64 = row.get(0)?;
            Ok((
                total_entries,
                PaymentSummary {
                    total_entries,
                    total_payment: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                    average_payment: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
                    max_payment: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
                    min_payment: row.get::<_, Option<i64>>(4)?.unwrap_or(0),
                    total_work_done: row.get::<_, Option<i64>>(5)?.unwrap_or(0),
                    average_work_done: row.get::<_, Option<f64>>(6)?.unwrap_or(0.0),
                    max_work_done: row.get::<_, Option<i64>>(7)?.unwrap_or(0),
                    min_work_done: row.get::<_, Option<i64>>(8)?.unwrap_or(0),
                },
            ))
        },
    )?;

    Ok(match summary {
        (0, _) => None,
        (_, s) => Some(s),
    })
}
