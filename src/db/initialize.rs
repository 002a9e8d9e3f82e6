use crate::db::migrate::ensure_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Returns the names of the tables that did not exist before this call.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    // All schema is guaranteed by the idempotent create-if-absent pass.
    ensure_schema(conn)
}
