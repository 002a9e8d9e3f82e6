use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// Table name + DDL executed only when the table is missing.
///
/// Name columns carry a UNIQUE constraint so that a write slipping past the
/// application-level check still cannot produce a duplicate.
const TABLES: &[(&str, &str)] = &[
    (
        "log",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        "employees",
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            employee_id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name   TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL,
            phone_no    TEXT,
            address     TEXT,
            designation TEXT,
            description TEXT
        );
        "#,
    ),
    (
        "own_companies",
        r#"
        CREATE TABLE IF NOT EXISTS own_companies (
            company_id            INTEGER PRIMARY KEY AUTOINCREMENT,
            company_name          TEXT NOT NULL UNIQUE,
            created_at            TEXT NOT NULL,
            phone_no              TEXT,
            address               TEXT,
            alternate_phone_no    TEXT,
            mail_id               TEXT,
            type_of_company       TEXT,
            gst_no                TEXT,
            pan_no                TEXT,
            bank_name             TEXT NOT NULL DEFAULT '[]',
            bank_branch           TEXT NOT NULL DEFAULT '[]',
            bank_ifsc_code        TEXT NOT NULL DEFAULT '[]',
            account_no            TEXT NOT NULL DEFAULT '[]',
            account_owner_name    TEXT NOT NULL DEFAULT '[]',
            date_of_establishment TEXT,
            description           TEXT
        );
        "#,
    ),
    (
        "bus_types",
        r#"
        CREATE TABLE IF NOT EXISTS bus_types (
            bus_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
            bus_type    TEXT NOT NULL UNIQUE
        );
        "#,
    ),
    (
        "works",
        r#"
        CREATE TABLE IF NOT EXISTS works (
            work_id     INTEGER PRIMARY KEY AUTOINCREMENT,
            work_name   TEXT NOT NULL UNIQUE,
            bus_type    TEXT NOT NULL,
            cost        INTEGER NOT NULL DEFAULT 0,
            description TEXT
        );
        "#,
    ),
    (
        "salaries",
        r#"
        CREATE TABLE IF NOT EXISTS salaries (
            salary_entry_id INTEGER PRIMARY KEY AUTOINCREMENT,
            payment         INTEGER NOT NULL DEFAULT 0,
            record_date     TEXT NOT NULL,
            employee_id     INTEGER NOT NULL,
            type_of_payment TEXT NOT NULL,
            mode_of_payment TEXT,
            company         TEXT NOT NULL,
            work_ids        TEXT NOT NULL DEFAULT '[]',
            costs           TEXT NOT NULL DEFAULT '[]',
            quantities      TEXT NOT NULL DEFAULT '[]',
            work_done       INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL
        );
        "#,
    ),
];

/// One primary-key lookup index per entity table.
const INDEXES: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_employee_id     ON employees(employee_id);
    CREATE INDEX IF NOT EXISTS idx_company_id      ON own_companies(company_id);
    CREATE INDEX IF NOT EXISTS idx_bus_type_id     ON bus_types(bus_type_id);
    CREATE INDEX IF NOT EXISTS idx_work_id         ON works(work_id);
    CREATE INDEX IF NOT EXISTS idx_salary_entry_id ON salaries(salary_entry_id);
"#;

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create every missing table and index. Existing tables are left untouched,
/// even when their layout predates the current one.
pub fn ensure_schema(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let mut created = Vec::new();

    for (name, ddl) in TABLES {
        if !table_exists(conn, name)? {
            conn.execute_batch(ddl)?;
            created.push(*name);
        }
    }

    conn.execute_batch(INDEXES)?;

    Ok(created)
}
