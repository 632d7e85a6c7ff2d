//! Core data structures for the record store.
//!
//! Defines the stored record type and the closed set of operation statuses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stored unit: an id paired with text content
///
/// Ids are not unique; the store keeps duplicates and lookups return the
/// first match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: i32,
    pub content: String,
}

impl Record {
    pub fn new(id: i32, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Content length in bytes
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Compare two records field by field
pub fn records_match(left: &Record, right: &Record) -> bool {
    let id_match = left.id == right.id;
    let content_match = left.content == right.content;
    id_match && content_match
}

/// Classified outcome of the most recent store operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    CapacityExceeded,
    InvalidInput,
    NotFound,
    Unknown,
    Idle,
}

impl Status {
    /// Whether this status reports a completed operation
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::CapacityExceeded => "capacity_exceeded",
            Status::InvalidInput => "invalid_input",
            Status::NotFound => "not_found",
            Status::Unknown => "unknown",
            Status::Idle => "idle",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
