//! Pure numeric computations over records.
//!
//! Nothing here touches store state. [`evaluate_record`] performs the
//! remainder dispatch for id processing and reports failures as errors;
//! [`evaluate_complex`] implements the parameterized complex operation.
//! The store translates both into outcomes at its public boundary.

use crate::constants::{
    HALT_REASON, LENGTH_MULTIPLIER, LENGTH_OFFSET, RECORD_DISPATCH_MODULUS, polynomial,
};
use crate::error::{Result, StoreError};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Calculation branch chosen for a record by `id % 3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordBranch {
    /// Remainder 0: content length times 1.5
    ScaledLength,
    /// Remainder 1: content length plus 10, unless the halt keyword is present
    OffsetLength,
    /// Any other remainder, including negative ones: square root of content length
    RootLength,
}

impl RecordBranch {
    /// Select the branch for an id using truncated remainder
    pub fn for_id(id: i32) -> Self {
        match id % RECORD_DISPATCH_MODULUS {
            0 => RecordBranch::ScaledLength,
            1 => RecordBranch::OffsetLength,
            _ => RecordBranch::RootLength,
        }
    }
}

/// Compute the derived value for a record
///
/// Returns `ProcessingHalted` when a remainder-1 record contains
/// `halt_keyword`, and `NonFiniteResult` if the branch produced NaN or infinity.
pub fn evaluate_record(record: &Record, halt_keyword: &str) -> Result<f64> {
    let length = record.content_len() as f64;
    let branch = RecordBranch::for_id(record.id);
    debug!("Processing {:?} branch for ID {}", branch, record.id);

    let value = match branch {
        RecordBranch::ScaledLength => length * LENGTH_MULTIPLIER,
        RecordBranch::OffsetLength => {
            if record.content.contains(halt_keyword) {
                return Err(StoreError::ProcessingHalted {
                    id: record.id,
                    reason: HALT_REASON.to_string(),
                });
            }
            length + LENGTH_OFFSET
        }
        RecordBranch::RootLength => length.sqrt(),
    };

    ensure_finite(record.id, value)
}

/// Reject NaN and infinite values computed for record `id`
pub fn ensure_finite(id: i32, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StoreError::NonFiniteResult { id })
    }
}

/// Calculation mode for the complex operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexMode {
    /// Mode 0: factor times record count (at least 1)
    Multiply,
    /// Mode 1: `1 + 2·factor + 3·factor²`
    Polynomial,
    /// Mode 2: natural log of factor when factor exceeds 1, else 0
    Logarithm,
}

impl ComplexMode {
    /// Numeric code accepted by the store
    pub fn code(&self) -> i32 {
        match self {
            ComplexMode::Multiply => 0,
            ComplexMode::Polynomial => 1,
            ComplexMode::Logarithm => 2,
        }
    }

    /// Parenthetical detail appended to the completion message
    pub fn detail(&self) -> &'static str {
        match self {
            ComplexMode::Multiply => "",
            ComplexMode::Polynomial => " (simulated polynomial)",
            ComplexMode::Logarithm => " (simulated log)",
        }
    }
}

impl TryFrom<i32> for ComplexMode {
    type Error = StoreError;

    fn try_from(mode: i32) -> Result<Self> {
        match mode {
            0 => Ok(ComplexMode::Multiply),
            1 => Ok(ComplexMode::Polynomial),
            2 => Ok(ComplexMode::Logarithm),
            _ => Err(StoreError::InvalidMode { mode }),
        }
    }
}

/// Evaluate the complex operation for a store holding `record_count` records
pub fn evaluate_complex(factor: f64, mode: ComplexMode, record_count: usize) -> f64 {
    match mode {
        ComplexMode::Multiply => factor * record_count.max(1) as f64,
        ComplexMode::Polynomial => {
            polynomial::C0 + polynomial::C1 * factor + polynomial::C2 * factor.powi(2)
        }
        ComplexMode::Logarithm => {
            if factor > 1.0 {
                factor.ln()
            } else {
                0.0
            }
        }
    }
}
