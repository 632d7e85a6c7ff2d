use criterion::{Criterion, black_box, criterion_group, criterion_main};
use record_store::{Record, RecordStore};

fn build_records(count: usize) -> Vec<Record> {
    (0..count as i32)
        .map(|id| Record::new(id, format!("content for record {}", id)))
        .collect()
}

fn bench_insert_many(c: &mut Criterion) {
    let records = build_records(10_000);

    c.bench_function("insert_many_10k", |b| {
        b.iter(|| {
            let mut store = RecordStore::new(10_000);
            black_box(store.insert_many(black_box(&records)))
        })
    });
}

fn bench_process_by_id(c: &mut Criterion) {
    let mut store = RecordStore::new(10_000);
    store.insert_many(&build_records(10_000));

    c.bench_function("process_by_id_last", |b| {
        b.iter(|| black_box(store.process_by_id(black_box(9_999))))
    });
    c.bench_function("process_by_id_missing", |b| {
        b.iter(|| black_box(store.process_by_id(black_box(-1))))
    });
}

criterion_group!(benches, bench_insert_many, bench_process_by_id);
criterion_main!(benches);
