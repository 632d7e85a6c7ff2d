//! Application constants for the record store
//!
//! This module contains default values, sentinel values and the fixed
//! coefficients used by the numeric processing operations.

// =============================================================================
// Store Defaults
// =============================================================================

/// Capacity used when neither the environment nor the CLI specifies one
pub const DEFAULT_CAPACITY: usize = 100;

/// Content substring that aborts processing of a remainder-1 record
pub const DEFAULT_HALT_KEYWORD: &str = "special";

/// Reason reported when the halt keyword is found
pub const HALT_REASON: &str = "Special keyword found, processing halted.";

// =============================================================================
// Sentinel Values
// =============================================================================

/// Returned by id processing when no record carries the requested id
pub const NOT_FOUND_SENTINEL: f64 = -1.0;

/// Returned when processing fails or the requested mode is invalid
pub const FAILURE_SENTINEL: f64 = f64::NAN;

// =============================================================================
// Record Processing Coefficients
// =============================================================================

/// Records are dispatched on `id % RECORD_DISPATCH_MODULUS`
pub const RECORD_DISPATCH_MODULUS: i32 = 3;

/// Multiplier applied to content length for remainder-0 records
pub const LENGTH_MULTIPLIER: f64 = 1.5;

/// Offset added to content length for remainder-1 records
pub const LENGTH_OFFSET: f64 = 10.0;

/// Polynomial coefficients for complex mode 1, lowest order first
pub mod polynomial {
    pub const C0: f64 = 1.0;
    pub const C1: f64 = 2.0;
    pub const C2: f64 = 3.0;
}

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the default store capacity
pub const ENV_CAPACITY: &str = "RECORD_STORE_CAPACITY";

/// Overrides the default halt keyword
pub const ENV_HALT_KEYWORD: &str = "RECORD_STORE_HALT_KEYWORD";
