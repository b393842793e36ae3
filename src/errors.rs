//! Unified application error type.
//! All modules (db, core, tracking, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::tracking::error::LocationError;
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

    #[error("Task store unavailable: {0}")]
    StoreUnavailable(String),

    // ---------------------------
    // Location / tracking
    // ---------------------------
    #[error(transparent)]
    Location(#[from] LocationError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No task with id {0}")]
    TaskNotFound(i64),

    #[error("No bookmark named '{0}'")]
    BookmarkNotFound(String),

    #[error("A bookmark named '{0}' already exists")]
    DuplicateBookmark(String),

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
