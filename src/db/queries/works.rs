use super::{id_exists, map_duplicate, name_taken};
use crate::errors::AppResult;
use crate::models::work::{Work, WorkBrief, WorkInput};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_work(row: &Row) -> Result<Work> {
    Ok(Work {
        work_id: row.get("work_id")?,
        work_name: row.get::<_, Option<String>>("work_name")?.unwrap_or_default(),
        bus_type: row.get::<_, Option<String>>("bus_type")?.unwrap_or_default(),
        cost: row.get::<_, Option<i64>>("cost")?.unwrap_or(0),
        description: row.get("description")?,
    })
}

fn map_brief(row: &Row) -> Result<WorkBrief> {
    Ok(WorkBrief {
        work_id: row.get("work_id")?,
        work_name: row.get::<_, Option<String>>("work_name")?.unwrap_or_default(),
        bus_type: row.get::<_, Option<String>>("bus_type")?.unwrap_or_default(),
        cost: row.get::<_, Option<i64>>("cost")?.unwrap_or(0),
    })
}

pub fn insert_work(conn: &Connection, w: &WorkInput) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO works (work_name, bus_type, cost, description)
         VALUES (?1, ?2, ?3, ?4)",
        params![w.work_name, w.bus_type, w.cost, w.description],
    )
    .map_err(|e| map_duplicate(e, "Work", &w.work_name))?;
    Ok(conn.last_insert_rowid())
}

pub fn find_work(conn: &Connection, id: i64) -> AppResult<Option<Work>> {
    let work = conn
        .query_row("SELECT * FROM works WHERE work_id = ?1", [id], map_work)
        .optional()?;
    Ok(work)
}

pub fn load_works(conn: &Connection) -> AppResult<Vec<Work>> {
    let mut stmt = conn.prepare("SELECT * FROM works ORDER BY work_id ASC")?;
    let rows = stmt.query_map([], map_work)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_works_brief(conn: &Connection) -> AppResult<Vec<WorkBrief>> {
    let mut stmt =
        conn.prepare("SELECT work_id, work_name, bus_type, cost FROM works ORDER BY work_id ASC")?;
    let rows = stmt.query_map([], map_brief)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_work(conn: &Connection, id: i64, w: &WorkInput) -> AppResult<usize> {
    let n = conn
        .execute(
            "UPDATE works
             SET work_name = ?1, bus_type = ?2, cost = ?3, description = ?4
             WHERE work_id = ?5",
            params![w.work_name, w.bus_type, w.cost, w.description, id],
        )
        .map_err(|e| map_duplicate(e, "Work", &w.work_name))?;
    Ok(n)
}

pub fn delete_work(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM works WHERE work_id = ?1", [id])?)
}

pub fn work_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    id_exists(conn, "works", "work_id", id)
}

pub fn work_name_taken(conn: &Connection, name: &str, exclude_id: Option<i64>) -> AppResult<bool> {
    name_taken(conn, "works", "work_name", "work_id", name, exclude_id)
}
