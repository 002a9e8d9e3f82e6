//! Parameterized SQL for every table. Values are always bound, never
//! interpolated; only the static table/column identifiers below are.

pub mod bus_types;
pub mod companies;
pub mod employees;
pub mod salaries;
pub mod summary;
pub mod works;

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, ErrorCode, params};

/// Wrap a decoding problem in the error rusqlite expects from a row mapper.
pub(crate) fn conversion_error(column: usize, msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        rusqlite::types::Type::Text,
        Box::new(AppError::InvalidInput(msg)),
    )
}

/// True when SQLite rejected a write because of a UNIQUE constraint.
pub(crate) fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation
    )
}

/// Map a constraint failure on a name column to the domain error.
pub(crate) fn map_duplicate(e: rusqlite::Error, entity: &'static str, name: &str) -> AppError {
    if is_unique_violation(&e) {
        AppError::DuplicateName {
            entity,
            name: name.to_string(),
        }
    } else {
        AppError::Db(e)
    }
}

/// Exact, case-sensitive lookup of `name` in `name_col`, optionally ignoring
/// the row whose `id_col` equals `exclude_id` (the row being updated).
pub(crate) fn name_taken(
    conn: &Connection,
    table: &str,
    name_col: &str,
    id_col: &str,
    name: &str,
    exclude_id: Option<i64>,
) -> AppResult<bool> {
    let taken = match exclude_id {
        Some(id) => {
            let sql = format!(
                "SELECT 1 FROM {table} WHERE {name_col} = ?1 AND {id_col} != ?2 LIMIT 1"
            );
            conn.prepare_cached(&sql)?.exists(params![name, id])?
        }
        None => {
            let sql = format!("SELECT 1 FROM {table} WHERE {name_col} = ?1 LIMIT 1");
            conn.prepare_cached(&sql)?.exists(params![name])?
        }
    };
    Ok(taken)
}

/// Whether a row with the given primary key exists.
pub(crate) fn id_exists(conn: &Connection, table: &str, id_col: &str, id: i64) -> AppResult<bool> {
    let sql = format!("SELECT 1 FROM {table} WHERE {id_col} = ?1 LIMIT 1");
    Ok(conn.prepare_cached(&sql)?.exists(params![id])?)
}
