use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, NaiveDate};
use labstock_core::InventoryItem;
use labstock_sort::{merge_sort, quick_sort};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NAMES: &[&str] = &[
    "Needle 25x7",
    "Sterile swab",
    "Syringe 5ml",
    "EDTA tube 4ml",
    "Nitrile glove M",
    "Nitrile glove L",
    "Citrate tube 3.2%",
];

fn batch(n: usize, seed: u64) -> Vec<InventoryItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..n)
        .map(|_| {
            let name = NAMES[rng.gen_range(0..NAMES.len())];
            let quantity = rng.gen_range(1..=200);
            let expiry = base + Duration::days(rng.gen_range(0..=365));
            InventoryItem::new(name, quantity, "PCR", expiry).unwrap()
        })
        .collect()
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_quantity");

    for &n in &[100usize, 1_000, 10_000] {
        let items = batch(n, 42);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("merge_sort", n), &items, |b, items| {
            b.iter(|| merge_sort(black_box(items), |i: &InventoryItem| i.quantity()))
        });
        group.bench_with_input(BenchmarkId::new("quick_sort", n), &items, |b, items| {
            b.iter(|| quick_sort(black_box(items), |i: &InventoryItem| i.quantity()))
        });
    }

    group.finish();
}

fn bench_quick_sort_presorted(c: &mut Criterion) {
    // Already-sorted input with a middle pivot stays near the average case;
    // this guards against regressing to the naive first-element pivot.
    let items = merge_sort(&batch(1_000, 42), |i: &InventoryItem| i.quantity());
    c.bench_function("quick_sort_presorted_1000", |b| {
        b.iter(|| quick_sort(black_box(&items), |i: &InventoryItem| i.quantity()))
    });
}

criterion_group!(benches, bench_sorts, bench_quick_sort_presorted);
criterion_main!(benches);
