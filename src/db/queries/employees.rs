use super::{id_exists, map_duplicate, name_taken};
use crate::errors::AppResult;
use crate::models::employee::{Employee, EmployeeInput};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        employee_id: row.get("employee_id")?,
        full_name: row.get::<_, Option<String>>("full_name")?.unwrap_or_default(),
        phone_no: row.get("phone_no")?,
        address: row.get("address")?,
        designation: row.get("designation")?,
        description: row.get("description")?,
        created_at: row.get::<_, Option<String>>("created_at")?.unwrap_or_default(),
    })
}

pub fn insert_employee(conn: &Connection, e: &EmployeeInput, created_at: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (full_name, created_at, phone_no, address, designation, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            e.full_name,
            created_at,
            e.phone_no,
            e.address,
            e.designation,
            e.description,
        ],
    )
    .map_err(|err| map_duplicate(err, "Employee", &e.full_name))?;
    Ok(conn.last_insert_rowid())
}

pub fn find_employee(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let employee = conn
        .query_row(
            "SELECT * FROM employees WHERE employee_id = ?1",
            [id],
            map_employee,
        )
        .optional()?;
    Ok(employee)
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees ORDER BY employee_id ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Overwrite every user field; `created_at` is kept.
pub fn update_employee(conn: &Connection, id: i64, e: &EmployeeInput) -> AppResult<usize> {
    let n = conn
        .execute(
            "UPDATE employees
             SET full_name = ?1, phone_no = ?2, address = ?3,
                 designation = ?4, description = ?5
             WHERE employee_id = ?6",
            params![
                e.full_name,
                e.phone_no,
                e.address,
                e.designation,
                e.description,
                id,
            ],
        )
        .map_err(|err| map_duplicate(err, "Employee", &e.full_name))?;
    Ok(n)
}

pub fn delete_employee(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM employees WHERE employee_id = ?1", [id])?)
}

pub fn employee_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    id_exists(conn, "employees", "employee_id", id)
}

pub fn employee_name_taken(
    conn: &Connection,
    full_name: &str,
    exclude_id: Option<i64>,
) -> AppResult<bool> {
    name_taken(conn, "employees", "full_name", "employee_id", full_name, exclude_id)
}
