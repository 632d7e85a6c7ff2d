//! Record Store Library
//!
//! A bounded-capacity, in-memory store for id/content records.
//!
//! This library provides:
//! - Single and batch insertion with capacity clipping
//! - A structured outcome for the most recent operation, with a derived
//!   status code and human-readable message
//! - Id lookup with a derived numeric computation per record
//! - A parameterized numeric operation over the stored records
//!
//! Store operations never fail: capacity limits, missing ids and processing
//! failures are reported through [`Status`] and sentinel return values.

pub mod cli;
pub mod compute;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod outcome;
pub mod store;

// Re-export commonly used types
pub use compute::ComplexMode;
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use models::{Record, Status, records_match};
pub use outcome::Outcome;
pub use store::RecordStore;
