use super::conversion_error;
use crate::errors::AppResult;
use crate::models::list_codec::{decode_ints, encode_list};
use crate::models::payment_type::PaymentType;
use crate::models::salary_entry::{SalaryEntry, ValidatedEntry};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn int_list(row: &Row, col: &str) -> Result<Vec<i64>> {
    let idx = row.as_ref().column_index(col)?;
    let raw: Option<String> = row.get(idx)?;
    decode_ints(raw.as_deref()).map_err(|msg| conversion_error(idx, format!("{}: {}", col, msg)))
}

pub fn map_salary(row: &Row) -> Result<SalaryEntry> {
    let kind: Option<String> = row.get("type_of_payment")?;

    Ok(SalaryEntry {
        salary_entry_id: row.get("salary_entry_id")?,
        payment: row.get::<_, Option<i64>>("payment")?.unwrap_or(0),
        record_date: row.get::<_, Option<String>>("record_date")?.unwrap_or_default(),
        employee_id: row.get("employee_id")?,
        type_of_payment: PaymentType::from_db_str(kind.as_deref().unwrap_or_default()),
        mode_of_payment: row.get("mode_of_payment")?,
        company: row.get::<_, Option<String>>("company")?.unwrap_or_default(),
        work_ids: int_list(row, "work_ids")?,
        costs: int_list(row, "costs")?,
        quantities: int_list(row, "quantities")?,
        work_done: row.get::<_, Option<i64>>("work_done")?.unwrap_or(0),
        created_at: row.get::<_, Option<String>>("created_at")?.unwrap_or_default(),
    })
}

/// JSON text of the three list columns, in column order.
fn encoded_lists(v: &ValidatedEntry) -> serde_json::Result<(String, String, String)> {
    Ok((
        encode_list(&v.input.work_ids)?,
        encode_list(&v.input.costs)?,
        encode_list(&v.input.quantities)?,
    ))
}

pub fn insert_salary(conn: &Connection, v: &ValidatedEntry, created_at: &str) -> AppResult<i64> {
    let (work_ids, costs, quantities) = encoded_lists(v)?;
    let e = &v.input;

    conn.execute(
        "INSERT INTO salaries (payment, record_date, employee_id, type_of_payment, mode_of_payment,
                               company, work_ids, costs, quantities, work_done, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            e.payment,
            e.record_date.format("%Y-%m-%d").to_string(),
            e.employee_id,
            e.type_of_payment.to_db_str(),
            e.mode_of_payment,
            e.company,
            work_ids,
            costs,
            quantities,
            v.work_done,
            created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite every user field and the derived `work_done`; `created_at` is kept.
pub fn update_salary(conn: &Connection, id: i64, v: &ValidatedEntry) -> AppResult<usize> {
    let (work_ids, costs, quantities) = encoded_lists(v)?;
    let e = &v.input;

    let n = conn.execute(
        "UPDATE salaries
         SET payment = ?1, record_date = ?2, employee_id = ?3, type_of_payment = ?4,
             mode_of_payment = ?5, company = ?6, work_ids = ?7, costs = ?8,
             quantities = ?9, work_done = ?10
         WHERE salary_entry_id = ?11",
        params![
            e.payment,
            e.record_date.format("%Y-%m-%d").to_string(),
            e.employee_id,
            e.type_of_payment.to_db_str(),
            e.mode_of_payment,
            e.company,
            work_ids,
            costs,
            quantities,
            v.work_done,
            id,
        ],
    )?;
    Ok(n)
}

/// Compound-match delete. Zero affected rows is not an error.
pub fn delete_salary(conn: &Connection, employee_id: i64, salary_entry_id: i64) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM salaries WHERE salary_entry_id = ?1 AND employee_id = ?2",
        params![salary_entry_id, employee_id],
    )?)
}

pub fn salary_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    super::id_exists(conn, "salaries", "salary_entry_id", id)
}

pub fn find_salary(conn: &Connection, id: i64) -> AppResult<Option<SalaryEntry>> {
    let entry = conn
        .query_row(
            "SELECT * FROM salaries WHERE salary_entry_id = ?1",
            [id],
            map_salary,
        )
        .optional()?;
    Ok(entry)
}

/// Optional filters combined with AND; `None` leaves that column unfiltered.
#[derive(Debug, Clone, Default)]
pub struct SalaryFilter {
    pub employee_id: Option<i64>,
    pub company: Option<String>,
}

pub fn load_salaries(conn: &Connection, filter: &SalaryFilter) -> AppResult<Vec<SalaryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM salaries
         WHERE (?1 IS NULL OR employee_id = ?1)
           AND (?2 IS NULL OR company = ?2)
         ORDER BY salary_entry_id ASC",
    )?;

    let rows = stmt.query_map(params![filter.employee_id, filter.company], map_salary)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
