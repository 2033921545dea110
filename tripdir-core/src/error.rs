//! Error types for the tripdir ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in tripdir operations.
#[derive(Error, Debug)]
pub enum TripDirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{person_name} is already booked from {start} to {end}")]
    Conflict {
        person_name: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Record already exists: {0}")]
    Constraint(String),

    #[error("Could not generate a unique id after {attempts} attempts")]
    CreationFailed { attempts: u32 },

    #[error("Tile fetch failed: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for tripdir operations.
pub type TripDirResult<T> = Result<T, TripDirError>;

impl TripDirError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
