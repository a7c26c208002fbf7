use charsum_core::CharSumTable;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_insert_from_one_slot(c: &mut Criterion) {
    c.bench_function("charsum_insert_grow_from_1", |b| {
        b.iter(|| {
            let mut ht = CharSumTable::new(1).unwrap();
            for i in 0..500 {
                ht.insert(format!("value{}", i), format!("key{}", i));
            }
            black_box(ht.capacity())
        })
    });
}

fn bench_insert_presized(c: &mut Criterion) {
    c.bench_function("charsum_insert_presized_4096", |b| {
        b.iter(|| {
            let mut ht = CharSumTable::new(4096).unwrap();
            for i in 0..500 {
                ht.insert(format!("value{}", i), format!("key{}", i));
            }
            black_box(ht.capacity())
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let mut ht = CharSumTable::new(1).unwrap();
    let keys: Vec<String> = (0..500).map(|i| format!("key{}", i)).collect();
    for key in &keys {
        ht.insert(key.to_uppercase(), key.as_str());
    }

    c.bench_function("charsum_lookup_500", |b| {
        b.iter(|| {
            let mut found = 0;
            for key in &keys {
                if ht.lookup(black_box(key)).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        })
    });
}

criterion_group!(
    benches,
    bench_insert_from_one_slot,
    bench_insert_presized,
    bench_lookup
);
criterion_main!(benches);
