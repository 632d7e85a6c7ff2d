//! Tests for the record store
//!
//! Split by concern: insertion, id processing, complex operations and
//! property checks over arbitrary insert sequences.

pub mod complex_tests;
pub mod property_tests;

use crate::models::Record;
use crate::store::RecordStore;

/// Create a record with content derived from its id
pub fn create_test_record(id: i32) -> Record {
    Record::new(id, format!("record-{}", id))
}

/// Create `count` records with consecutive ids starting at `first_id`
pub fn create_test_records(first_id: i32, count: usize) -> Vec<Record> {
    (0..count as i32)
        .map(|offset| create_test_record(first_id + offset))
        .collect()
}

/// Create a store already holding `filled` records
pub fn create_filled_store(capacity: usize, filled: usize) -> RecordStore {
    let mut store = RecordStore::new(capacity);
    for record in create_test_records(1, filled) {
        store.insert_one(record);
    }
    store
}
