//! Bounded-capacity record store.
//!
//! [`RecordStore`] owns an ordered sequence of records, a running count of
//! accepted records and the [`Outcome`] of the most recent operation. Every
//! public operation returns a plain value; capacity limits, missing ids and
//! processing failures are reported through the outcome and sentinel values
//! rather than as errors.

use crate::compute::{ComplexMode, evaluate_complex, evaluate_record};
use crate::config::StoreConfig;
use crate::constants::{DEFAULT_HALT_KEYWORD, FAILURE_SENTINEL, NOT_FOUND_SENTINEL};
use crate::error::{Result, StoreError};
use crate::models::{Record, Status};
use crate::outcome::Outcome;
use tracing::{debug, error, info, warn};

#[cfg(test)]
pub mod tests;

/// Record store with a fixed capacity set at construction
///
/// # Example
///
/// ```rust
/// use record_store::{Record, RecordStore, Status};
///
/// let mut store = RecordStore::new(2);
/// assert_eq!(store.insert_one(Record::new(6, "hello")), Status::Success);
/// assert_eq!(store.process_by_id(6), 7.5);
/// assert_eq!(store.process_by_id(999), -1.0);
/// assert_eq!(store.current_status(), Status::NotFound);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    capacity: usize,
    total_processed: usize,
    halt_keyword: String,
    last_outcome: Outcome,
}

impl RecordStore {
    /// Create an empty store holding at most `capacity` records
    ///
    /// A zero capacity is accepted; the store starts with an `InvalidInput`
    /// status instead of `Idle`.
    pub fn new(capacity: usize) -> Self {
        Self::build(capacity, DEFAULT_HALT_KEYWORD.to_string())
    }

    /// Create an empty store from configuration
    ///
    /// Fails with a configuration error if the configuration does not validate.
    pub fn with_config(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config.capacity, config.halt_keyword.clone()))
    }

    fn build(capacity: usize, halt_keyword: String) -> Self {
        info!("Record store created with capacity: {}", capacity);

        let mut store = Self {
            records: Vec::with_capacity(capacity),
            capacity,
            total_processed: 0,
            halt_keyword,
            last_outcome: Outcome::Initialized,
        };

        if capacity == 0 {
            store.record_outcome(Outcome::ZeroCapacity);
            warn!("{}", store.last_outcome);
        }

        store
    }

    /// Append a single record if there is room for it
    pub fn insert_one(&mut self, record: Record) -> Status {
        if !self.has_capacity(1) {
            let outcome = Outcome::InsertRejected {
                id: record.id,
                capacity: self.capacity,
            };
            warn!("{}", outcome);
            return self.record_outcome(outcome);
        }

        let id = record.id;
        self.records.push(record);
        self.total_processed += 1;

        let outcome = Outcome::Inserted { id };
        info!("{}", outcome);
        self.record_outcome(outcome)
    }

    /// Append as many leading records of `records` as capacity allows
    ///
    /// Returns the number inserted. Records beyond the available space are
    /// dropped without individual reporting; inspect [`Self::current_status`]
    /// to tell a full insert from a clipped or empty one.
    pub fn insert_many(&mut self, records: &[Record]) -> usize {
        let available = self.remaining_capacity();
        let to_insert = records.len().min(available);

        if to_insert == 0 {
            let outcome = if available == 0 && !records.is_empty() {
                Outcome::BatchRejected {
                    capacity: self.capacity,
                }
            } else if records.is_empty() {
                Outcome::BatchEmpty
            } else {
                Outcome::NothingAdded
            };

            if outcome.status() == Status::CapacityExceeded {
                warn!("{}", outcome);
            } else {
                info!("{}", outcome);
            }
            self.record_outcome(outcome);
            return 0;
        }

        debug_assert!(self.has_capacity(to_insert));
        self.records.extend_from_slice(&records[..to_insert]);
        self.total_processed += to_insert;

        let outcome = if to_insert < records.len() {
            Outcome::BatchClipped {
                inserted: to_insert,
                requested: records.len(),
                capacity: self.capacity,
            }
        } else {
            Outcome::BatchInserted {
                inserted: to_insert,
                requested: records.len(),
            }
        };
        info!("{}", outcome);
        self.record_outcome(outcome);

        to_insert
    }

    /// Number of records accepted since construction
    pub fn total_processed(&self) -> usize {
        self.total_processed
    }

    /// Human-readable description of the most recent operation
    pub fn status_message(&self) -> String {
        self.last_outcome.to_string()
    }

    /// Classified status of the most recent operation
    pub fn current_status(&self) -> Status {
        self.last_outcome.status()
    }

    /// Structured outcome of the most recent operation
    pub fn last_outcome(&self) -> &Outcome {
        &self.last_outcome
    }

    /// Compute the derived value of the first record carrying `id`
    ///
    /// Returns `-1.0` with status `NotFound` when no record matches, and NaN
    /// with status `Unknown` when processing of the matched record fails.
    pub fn process_by_id(&mut self, id: i32) -> f64 {
        match self.evaluate_by_id(id) {
            Ok(value) => {
                self.record_outcome(Outcome::Processed { id });
                value
            }
            Err(StoreError::RecordNotFound { .. }) => {
                let outcome = Outcome::NotFound { id };
                warn!("{}", outcome);
                self.record_outcome(outcome);
                NOT_FOUND_SENTINEL
            }
            Err(e @ StoreError::ProcessingHalted { .. }) => {
                let outcome = Outcome::ProcessingFailed {
                    id,
                    reason: e.to_string(),
                };
                error!("{}", outcome);
                self.record_outcome(outcome);
                FAILURE_SENTINEL
            }
            Err(e) => {
                let outcome = Outcome::UnexpectedFailure {
                    id,
                    reason: e.to_string(),
                };
                error!("{}", outcome);
                self.record_outcome(outcome);
                FAILURE_SENTINEL
            }
        }
    }

    /// Run the parameterized complex operation
    ///
    /// `config` is accepted for mode-specific tuning but is not interpreted.
    /// Unknown modes return NaN with status `InvalidInput`.
    pub fn process_complex(&mut self, factor: f64, mode: i32, config: &str) -> f64 {
        debug!(
            "Complex operation called with factor={}, mode={}, config={:?}",
            factor, mode, config
        );

        match ComplexMode::try_from(mode) {
            Ok(mode) => {
                let result = evaluate_complex(factor, mode, self.records.len());
                self.record_outcome(Outcome::ComplexCompleted { mode });
                result
            }
            Err(_) => {
                let outcome = Outcome::InvalidMode { mode };
                error!("{}", outcome);
                self.record_outcome(outcome);
                FAILURE_SENTINEL
            }
        }
    }

    /// Fixed maximum number of records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Free slots left before the store is full
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.records.len())
    }

    /// Stored records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// First record carrying `id`, if any
    pub fn get(&self, id: i32) -> Option<&Record> {
        self.find_index_by_id(id)
            .ok()
            .and_then(|index| self.records.get(index))
    }

    fn has_capacity(&self, additional: usize) -> bool {
        self.records.len() + additional <= self.capacity
    }

    fn find_index_by_id(&self, id: i32) -> Result<usize> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::RecordNotFound { id })
    }

    fn evaluate_by_id(&self, id: i32) -> Result<f64> {
        let index = self.find_index_by_id(id)?;
        let record = self
            .records
            .get(index)
            .ok_or(StoreError::RecordNotFound { id })?;
        debug!("Processing record ID: {} found at index {}", id, index);
        evaluate_record(record, &self.halt_keyword)
    }

    fn record_outcome(&mut self, outcome: Outcome) -> Status {
        self.last_outcome = outcome;
        self.last_outcome.status()
    }
}
