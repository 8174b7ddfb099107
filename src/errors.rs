//! Unified application error type.
//! All modules (models, core, db, cli) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Stored state '{store}' is corrupted: {reason}")]
    CorruptState { store: String, reason: String },

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid shift type: {0} (expected day, night, evening or off)")]
    InvalidShiftType(String),

    #[error("Invalid salary rules: {0}")]
    InvalidRules(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid date range: end date {end} precedes start date {start}")]
    InvalidRange { start: String, end: String },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
