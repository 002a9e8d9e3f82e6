//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Entity rules
    // ---------------------------
    #[error("{entity} with name {name} already exists")]
    DuplicateName { entity: &'static str, name: String },

    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Company with name {0} does not exist")]
    UnknownCompany(String),

    #[error("Employee with id {0} does not exist")]
    UnknownEmployee(i64),

    #[error("Bus type with name {0} does not exist")]
    UnknownBusType(String),

    // ---------------------------
    // Salary pipeline
    // ---------------------------
    #[error("Salary entry with id {0} does not exist")]
    UnknownSalaryEntry(i64),

    #[error("Advance payment not allowed in same entry with work done ({0})")]
    InvalidAdvanceEntry(i64),

    #[error("costs and quantities differ in length ({costs} vs {quantities})")]
    MismatchedVectorLength { costs: usize, quantities: usize },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

/// Coarse classification of [`AppError`], stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateName,
    NotFound,
    UnknownReference,
    InvalidAdvanceEntry,
    MismatchedVectorLength,
    InvalidInput,
    StorageFailure,
    Config,
    Io,
    Export,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateName => "duplicate_name",
            ErrorKind::NotFound => "not_found",
            ErrorKind::UnknownReference => "unknown_reference",
            ErrorKind::InvalidAdvanceEntry => "invalid_advance_entry",
            ErrorKind::MismatchedVectorLength => "mismatched_vector_length",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::StorageFailure => "storage_failure",
            ErrorKind::Config => "config",
            ErrorKind::Io => "io",
            ErrorKind::Export => "export",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::DuplicateName { .. } => ErrorKind::DuplicateName,
            AppError::NotFound { .. } | AppError::UnknownSalaryEntry(_) => ErrorKind::NotFound,
            AppError::UnknownCompany(_)
            | AppError::UnknownEmployee(_)
            | AppError::UnknownBusType(_) => ErrorKind::UnknownReference,
            AppError::InvalidAdvanceEntry(_) => ErrorKind::InvalidAdvanceEntry,
            AppError::MismatchedVectorLength { .. } => ErrorKind::MismatchedVectorLength,
            AppError::InvalidDate(_) | AppError::InvalidInput(_) => ErrorKind::InvalidInput,
            AppError::Db(_) | AppError::Json(_) => ErrorKind::StorageFailure,
            AppError::Config(_) | AppError::ConfigLoad | AppError::ConfigSave => ErrorKind::Config,
            AppError::Io(_) => ErrorKind::Io,
            AppError::Export(_) => ErrorKind::Export,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

