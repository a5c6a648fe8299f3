use contactdb_core::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;

const SIZES: [u32; 2] = [1_000, 10_000];

/// Sorted phones: the worst case for an unbalanced tree.
fn sorted_store(n: u32) -> ContactStore {
    let mut store = ContactStore::default();
    for i in 0..n {
        store
            .add(format!("name{i}"), format!("{i:08}"), format!("{i}@x.com"))
            .unwrap();
    }
    store
}

/// Deterministic scramble (multiplier coprime with n).
fn scrambled_store(n: u32) -> ContactStore {
    let mut store = ContactStore::default();
    for i in 0..n {
        let k = (i as u64 * 7_919 % n as u64) as u32;
        store
            .add(format!("name{k}"), format!("{k:08}"), format!("{k}@x.com"))
            .unwrap();
    }
    store
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("sorted", n), &n, |b, &n| {
            b.iter(|| black_box(sorted_store(n)))
        });
        group.bench_with_input(BenchmarkId::new("scrambled", n), &n, |b, &n| {
            b.iter(|| black_box(scrambled_store(n)))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let store = scrambled_store(10_000);
    c.bench_function("search_by_phone_prefix", |b| {
        b.iter(|| black_box(store.search_by_phone_prefix(black_box("0000"))))
    });
    c.bench_function("search_by_name_prefix/hit", |b| {
        b.iter(|| black_box(store.search_by_name_prefix(black_box("name99"))))
    });
    c.bench_function("search_by_name_prefix/gated_miss", |b| {
        b.iter(|| black_box(store.search_by_name_prefix(black_box("zzz"))))
    });
    c.bench_function("list_all", |b| b.iter(|| black_box(store.list_all())));
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("delete_all/1000", |b| {
        b.iter_batched(
            || sorted_store(1_000),
            |mut store| {
                for i in 0..1_000 {
                    black_box(store.delete(&format!("{i}@x.com")));
                }
                store
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_delete);
criterion_main!(benches);
