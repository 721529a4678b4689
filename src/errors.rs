//! Unified application error type.
//! All modules (db, core, tui, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / terminal
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid timestamp stored in database: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected MM/YY)")]
    InvalidMonth(String),

    #[error("Invalid duration: {0} (expected e.g. 8h, 7h30m, 450m)")]
    InvalidDuration(String),

    // ---------------------------
    // Tracking errors
    // ---------------------------
    #[error("A session is already active for '{company}' since {since}. Stop it with 'timetracker stop' first.")]
    SessionAlreadyActive { company: String, since: String },

    #[error("There is no active session to stop")]
    NoActiveSession,

    #[error("Company not found: {0}")]
    CompanyNotFound(String),

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

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
