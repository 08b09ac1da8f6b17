//! Benchmark suite for record reads and report aggregation
//!
//! Every report re-reads its collections in full, so these benchmarks measure
//! the cost of parsing and aggregating inventories of growing size using the
//! divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Data is generated in memory: `n` batches spread over four bean types and
//! three statuses, with two processing stages per batch.

use coffee_plant_tracker::core::FixedClock;
use coffee_plant_tracker::io::{Collection, InMemoryStorage, RecordStore};
use coffee_plant_tracker::{Batch, CoffeePlant};
use std::fmt::Write;

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn main() {
    divan::main();
}

fn generated_storage(batches: usize) -> InMemoryStorage {
    const BEAN_TYPES: [&str; 4] = ["Arabica", "Robusta", "Liberica", "Excelsa"];
    const STATUSES: [&str; 3] = ["received", "washing", "drying"];

    let mut inventory = String::new();
    let mut processing = String::new();
    for i in 0..batches {
        let weight = 100.0 + (i % 400) as f64;
        writeln!(
            inventory,
            "B{:06},2023-05-15,F{:03},{},{},{}",
            i,
            i % 50,
            BEAN_TYPES[i % BEAN_TYPES.len()],
            weight,
            STATUSES[i % STATUSES.len()]
        )
        .unwrap();
        writeln!(
            processing,
            "B{:06},washing,2023-05-16,2023-05-17,{}",
            i,
            weight * 0.98
        )
        .unwrap();
        writeln!(
            processing,
            "B{:06},drying,2023-05-17,2023-05-20,{}",
            i,
            weight * 0.9
        )
        .unwrap();
    }

    InMemoryStorage::new()
        .with_contents(Collection::Batches, &inventory)
        .with_contents(Collection::Processing, &processing)
}

fn generated_plant(batches: usize) -> CoffeePlant {
    let clock = FixedClock(
        chrono::NaiveDate::from_ymd_opt(2023, 6, 10)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap(),
    );
    CoffeePlant::new(Box::new(generated_storage(batches)), Box::new(clock))
}

/// Parse the full batch collection
#[divan::bench(args = SIZES)]
fn read_all_batches(bencher: divan::Bencher, batches: usize) {
    let storage = generated_storage(batches);
    let store = RecordStore::new(&storage);

    bencher.bench_local(|| store.read_all::<Batch>().expect("Read failed"));
}

/// Group inventory weight by bean type and status
#[divan::bench(args = SIZES)]
fn inventory_summary(bencher: divan::Bencher, batches: usize) {
    let plant = generated_plant(batches);

    bencher.bench_local(|| plant.inventory_summary().expect("Summary failed"));
}

/// Average yields over two stages per batch
#[divan::bench(args = SIZES)]
fn processing_yields(bencher: divan::Bencher, batches: usize) {
    let plant = generated_plant(batches);

    bencher.bench_local(|| plant.processing_yields().expect("Yields failed"));
}
