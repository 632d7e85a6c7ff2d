//! Structured outcome of the most recent store operation
//!
//! The store records one [`Outcome`] per mutating or processing call. The
//! classified [`Status`] and the human-readable message are both derived from
//! it, so they always describe the same event. Callers should branch on the
//! status or the variant fields; the rendered text is advisory.

use crate::compute::ComplexMode;
use crate::models::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Initialized,
    ZeroCapacity,
    Inserted {
        id: i32,
    },
    InsertRejected {
        id: i32,
        capacity: usize,
    },
    BatchRejected {
        capacity: usize,
    },
    BatchEmpty,
    NothingAdded,
    BatchInserted {
        inserted: usize,
        requested: usize,
    },
    /// Some but not all records of a batch were inserted
    BatchClipped {
        inserted: usize,
        requested: usize,
        capacity: usize,
    },
    Processed {
        id: i32,
    },
    NotFound {
        id: i32,
    },
    ProcessingFailed {
        id: i32,
        reason: String,
    },
    /// Processing failed for a reason other than the halt keyword
    UnexpectedFailure {
        id: i32,
        reason: String,
    },
    ComplexCompleted {
        mode: ComplexMode,
    },
    InvalidMode {
        mode: i32,
    },
}

impl Outcome {
    /// Classify this outcome
    pub fn status(&self) -> Status {
        match self {
            Outcome::Initialized | Outcome::BatchEmpty | Outcome::NothingAdded => Status::Idle,
            Outcome::ZeroCapacity | Outcome::InvalidMode { .. } => Status::InvalidInput,
            Outcome::Inserted { .. }
            | Outcome::BatchInserted { .. }
            | Outcome::Processed { .. }
            | Outcome::ComplexCompleted { .. } => Status::Success,
            Outcome::InsertRejected { .. }
            | Outcome::BatchRejected { .. }
            | Outcome::BatchClipped { .. } => Status::CapacityExceeded,
            Outcome::NotFound { .. } => Status::NotFound,
            Outcome::ProcessingFailed { .. } | Outcome::UnexpectedFailure { .. } => {
                Status::Unknown
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Initialized => write!(f, "Initialized."),
            Outcome::ZeroCapacity => write!(f, "Warning: Initialized with zero capacity."),
            Outcome::Inserted { id } => write!(f, "Record with ID {} added successfully.", id),
            Outcome::InsertRejected { id, capacity } => write!(
                f,
                "Error: Capacity reached ({}). Cannot add record ID {}.",
                capacity, id
            ),
            Outcome::BatchRejected { capacity } => write!(
                f,
                "Error: Capacity reached ({}). Cannot add more records.",
                capacity
            ),
            Outcome::BatchEmpty => write!(f, "Info: No records provided to add."),
            Outcome::NothingAdded => write!(f, "Info: No records added."),
            Outcome::BatchInserted {
                inserted,
                requested,
            } => write!(
                f,
                "Successfully added {} out of {} provided records.",
                inserted, requested
            ),
            Outcome::BatchClipped {
                inserted,
                requested,
                capacity,
            } => write!(
                f,
                "Successfully added {} out of {} provided records. Capacity limit ({}) reached.",
                inserted, requested, capacity
            ),
            Outcome::Processed { id } => write!(f, "Successfully processed record ID: {}", id),
            Outcome::NotFound { id } => write!(f, "Error: Record with ID {} not found.", id),
            Outcome::ProcessingFailed { id, reason } => {
                write!(f, "Error processing record ID {}: {}", id, reason)
            }
            Outcome::UnexpectedFailure { id, reason } => {
                write!(f, "Unknown error processing record ID {}: {}", id, reason)
            }
            Outcome::ComplexCompleted { mode } => {
                write!(f, "Complex op mode {} finished{}.", mode.code(), mode.detail())
            }
            Outcome::InvalidMode { mode } => {
                write!(f, "Error: Invalid mode {} for complex operation.", mode)
            }
        }
    }
}
