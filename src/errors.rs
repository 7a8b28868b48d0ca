//! Unified application error type.
//! All modules (store, core, cli, export, utils) return AppError to keep the
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
    // Storage-related
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised by the store layer when a persisted slot does not parse.
    /// Always recovered inside the store (slot cleared, value treated as
    /// absent); callers never see it.
    #[error("Corrupt value in storage slot '{0}'")]
    StorageCorrupt(String),

    // ---------------------------
    // Authentication / session
    // ---------------------------
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not logged in. Run 'ponto login <email> <password>' first")]
    NotLoggedIn,

    #[error("Admin session required: {0}")]
    Unauthorized(String),

    // ---------------------------
    // Roster
    // ---------------------------
    #[error("A user with email '{0}' already exists")]
    DuplicateIdentity(String),

    #[error("No user with id '{0}'")]
    UnknownUser(String),

    #[error("Invalid role '{0}'. Use 'admin' or 'user'")]
    InvalidRole(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
