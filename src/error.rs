//! Error handling for record store operations.
//!
//! Store operations never surface these errors to callers; they are
//! converted into an [`crate::outcome::Outcome`] at the operation boundary.
//! Configuration and record loading return them directly.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record with ID {id} not found in data storage.")]
    RecordNotFound { id: i32 },

    #[error("{reason}")]
    ProcessingHalted { id: i32, reason: String },

    #[error("Computation for record ID {id} produced a non-finite value")]
    NonFiniteResult { id: i32 },

    #[error("Invalid mode {mode} for complex operation")]
    InvalidMode { mode: i32 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid record on line {line}: {reason}")]
    RecordParse { line: usize, reason: String },
}

impl StoreError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a record parse error for a 1-based line number
    pub fn record_parse(line: usize, reason: impl Into<String>) -> Self {
        Self::RecordParse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
