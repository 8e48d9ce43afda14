//! Unified application error type.
//! All modules (ingest, core, db, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Ingest errors
    // ---------------------------
    #[error("Failed to read spreadsheet: {0}")]
    Ingest(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("Unknown store: {0}")]
    UnknownStore(String),

    #[error("Invalid board column: {0}")]
    InvalidColumn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
