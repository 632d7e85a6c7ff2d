//! Property checks over arbitrary insert sequences

use super::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum InsertOp {
    One(Record),
    Many(Vec<Record>),
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (-50i32..50, "[a-z ]{0,12}").prop_map(|(id, content)| Record::new(id, content))
}

fn op_strategy() -> impl Strategy<Value = InsertOp> {
    prop_oneof![
        record_strategy().prop_map(InsertOp::One),
        proptest::collection::vec(record_strategy(), 0..6).prop_map(InsertOp::Many),
    ]
}

proptest! {
    /// The store never holds more records than its capacity.
    #[test]
    fn len_never_exceeds_capacity(
        capacity in 0usize..10,
        ops in proptest::collection::vec(op_strategy(), 0..20),
    ) {
        let mut store = RecordStore::new(capacity);
        for op in ops {
            match op {
                InsertOp::One(record) => { store.insert_one(record); }
                InsertOp::Many(records) => { store.insert_many(&records); }
            }
            prop_assert!(store.len() <= capacity);
        }
    }

    /// The processed counter tracks exactly the records accepted.
    #[test]
    fn total_processed_matches_accepted(
        capacity in 0usize..10,
        ops in proptest::collection::vec(op_strategy(), 0..20),
    ) {
        let mut store = RecordStore::new(capacity);
        let mut accepted = 0usize;
        for op in ops {
            let before = store.total_processed();
            match op {
                InsertOp::One(record) => {
                    if store.insert_one(record).is_success() {
                        accepted += 1;
                    }
                }
                InsertOp::Many(records) => accepted += store.insert_many(&records),
            }
            prop_assert!(store.total_processed() >= before);
        }
        prop_assert_eq!(store.total_processed(), accepted);
        prop_assert_eq!(store.len(), accepted);
    }

    /// Batch inserts append an in-order prefix bounded by free space.
    #[test]
    fn insert_many_appends_prefix(
        capacity in 0usize..10,
        prefill in 0usize..10,
        batch in proptest::collection::vec(record_strategy(), 0..12),
    ) {
        let mut store = create_filled_store(capacity, prefill);
        let before = store.records().to_vec();
        let free = capacity.saturating_sub(before.len());

        let inserted = store.insert_many(&batch);

        prop_assert_eq!(inserted, batch.len().min(free));
        prop_assert_eq!(&store.records()[..before.len()], before.as_slice());
        prop_assert_eq!(&store.records()[before.len()..], &batch[..inserted]);
    }

    /// Id processing always returns a number and never touches the records.
    #[test]
    fn process_by_id_is_read_only(
        records in proptest::collection::vec(record_strategy(), 0..8),
        id in -60i32..60,
    ) {
        let mut store = RecordStore::new(8);
        store.insert_many(&records);
        let before = store.records().to_vec();

        let value = store.process_by_id(id);

        prop_assert_eq!(store.records(), before.as_slice());
        if store.get(id).is_none() {
            prop_assert_eq!(value, -1.0);
        } else {
            prop_assert!(value.is_nan() || value >= 0.0);
        }
    }
}
