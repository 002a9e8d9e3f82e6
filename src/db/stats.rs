use crate::db::pool::DbPool;
use crate::errors::AppResult;
use serde::Serialize;
use std::fs;

const COUNTED_TABLES: &[&str] = &[
    "employees",
    "own_companies",
    "bus_types",
    "works",
    "salaries",
    "log",
];

#[derive(Debug, Clone, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DbInfo {
    pub file: String,
    pub size_bytes: u64,
    pub tables: Vec<TableCount>,
    pub first_record_date: Option<String>,
    pub last_record_date: Option<String>,
}

pub fn collect_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<DbInfo> {
    let size_bytes = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let mut tables = Vec::with_capacity(COUNTED_TABLES.len());
    for table in COUNTED_TABLES {
        // table names come from the constant list above, never from input
        let rows: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
        tables.push(TableCount { table: *table, rows });
    }

    let (first_record_date, last_record_date): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(record_date), MAX(record_date) FROM salaries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(DbInfo {
        file: db_path.to_string(),
        size_bytes,
        tables,
        first_record_date,
        last_record_date,
    })
}
