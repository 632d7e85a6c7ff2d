//! Tests for the parameterized complex operation

use super::*;
use crate::compute::ComplexMode;
use crate::models::Status;
use crate::outcome::Outcome;

#[test]
fn test_multiply_uses_at_least_one() {
    let mut store = RecordStore::new(5);

    assert_eq!(store.process_complex(3.0, 0, ""), 3.0);
    assert_eq!(store.current_status(), Status::Success);
    assert_eq!(store.status_message(), "Complex op mode 0 finished.");
}

#[test]
fn test_multiply_by_record_count() {
    let mut store = create_filled_store(5, 4);

    assert_eq!(store.process_complex(2.5, 0, "ignored"), 10.0);
}

#[test]
fn test_polynomial_mode() {
    let mut store = RecordStore::new(1);

    assert_eq!(store.process_complex(2.0, 1, ""), 17.0);
    assert_eq!(
        store.last_outcome(),
        &Outcome::ComplexCompleted {
            mode: ComplexMode::Polynomial
        }
    );
    assert_eq!(store.process_complex(2.0, 1, "4 5 6"), 17.0);
}

#[test]
fn test_logarithm_mode() {
    let mut store = RecordStore::new(1);

    assert_eq!(store.process_complex(1.0, 2, ""), 0.0);
    assert_eq!(store.current_status(), Status::Success);

    let value = store.process_complex(std::f64::consts::E.powi(2), 2, "");
    assert!((value - 2.0).abs() < 1e-12);
    assert_eq!(
        store.status_message(),
        "Complex op mode 2 finished (simulated log)."
    );
}

#[test]
fn test_invalid_mode_returns_nan() {
    let mut store = RecordStore::new(1);

    assert!(store.process_complex(1.0, 7, "").is_nan());
    assert_eq!(store.current_status(), Status::InvalidInput);
    assert_eq!(
        store.status_message(),
        "Error: Invalid mode 7 for complex operation."
    );
}

#[test]
fn test_complex_after_failure_resets_status() {
    let mut store = RecordStore::new(1);

    store.process_by_id(5);
    assert_eq!(store.current_status(), Status::NotFound);

    store.process_complex(1.0, 1, "");
    assert_eq!(store.current_status(), Status::Success);
}
