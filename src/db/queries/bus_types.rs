use super::{id_exists, map_duplicate, name_taken};
use crate::errors::AppResult;
use crate::models::bus_type::BusType;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_bus_type(row: &Row) -> Result<BusType> {
    Ok(BusType {
        bus_type_id: row.get("bus_type_id")?,
        bus_type: row.get::<_, Option<String>>("bus_type")?.unwrap_or_default(),
    })
}

pub fn insert_bus_type(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO bus_types (bus_type) VALUES (?1)", [name])
        .map_err(|e| map_duplicate(e, "Bus type", name))?;
    Ok(conn.last_insert_rowid())
}

pub fn find_bus_type(conn: &Connection, id: i64) -> AppResult<Option<BusType>> {
    let bt = conn
        .query_row(
            "SELECT bus_type_id, bus_type FROM bus_types WHERE bus_type_id = ?1",
            [id],
            map_bus_type,
        )
        .optional()?;
    Ok(bt)
}

pub fn load_bus_types(conn: &Connection) -> AppResult<Vec<BusType>> {
    let mut stmt =
        conn.prepare("SELECT bus_type_id, bus_type FROM bus_types ORDER BY bus_type_id ASC")?;
    let rows = stmt.query_map([], map_bus_type)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_bus_type(conn: &Connection, id: i64, name: &str) -> AppResult<usize> {
    let n = conn
        .execute(
            "UPDATE bus_types SET bus_type = ?1 WHERE bus_type_id = ?2",
            params![name, id],
        )
        .map_err(|e| map_duplicate(e, "Bus type", name))?;
    Ok(n)
}

pub fn delete_bus_type(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM bus_types WHERE bus_type_id = ?1", [id])?)
}

pub fn bus_type_id_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    id_exists(conn, "bus_types", "bus_type_id", id)
}

/// Bus types are referenced by name, so existence is checked by name too.
pub fn bus_type_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    name_taken(conn, "bus_types", "bus_type", "bus_type_id", name, None)
}

pub fn bus_type_name_taken(conn: &Connection, name: &str, exclude_id: Option<i64>) -> AppResult<bool> {
    name_taken(conn, "bus_types", "bus_type", "bus_type_id", name, exclude_id)
}
