//! Core error types for backwell-core.
//!
//! Defines the error hierarchy using thiserror. Construction-time
//! validation is the only fatal path in the session core; wrong-phase
//! operations are silent no-ops by design, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for backwell-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Program validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when a `DayProgram` fails construction-time validation.
///
/// A malformed program is rejected before any session state is created;
/// playback never has to discover a bad segment mid-session.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A segment with a non-positive duration
    #[error("Day {day}: segment '{segment}' has non-positive duration")]
    NonPositiveDuration { day: u32, segment: String },

    /// An exercise with an empty name
    #[error("Day {day}: exercise at index {index} has an empty name")]
    EmptyName { day: u32, index: usize },

    /// A mental segment with no guidance text
    #[error("Day {day}: mental segment at index {index} has no guidance text")]
    EmptyGuidance { day: u32, index: usize },

    /// Day number outside the program range
    #[error("Day number {day} is out of range (1..={max})")]
    DayOutOfRange { day: u32, max: u32 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory or config file I/O failed
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
