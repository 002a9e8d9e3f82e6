//! SQLite connection wrapper (one connection per CLI invocation).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file and make sure every table exists.
    pub fn new(path: &str) -> AppResult<Self> {
        let mut pool = Self::open_raw(path)?;
        pool.init_schema()?;
        Ok(pool)
    }

    /// Open without touching the schema.
    pub fn open_raw(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private in-memory database with the full schema (tests, dry runs).
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Create missing tables; returns the names of those created.
    pub fn init_schema(&mut self) -> AppResult<Vec<&'static str>> {
        init_db(&self.conn)
    }

    /// Run `func` inside an IMMEDIATE transaction.
    ///
    /// The write lock is taken before the first read, so a uniqueness or
    /// reference check and the write that depends on it cannot interleave
    /// with another writer. Commits on `Ok`, rolls back on `Err`.
    pub fn with_tx<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
