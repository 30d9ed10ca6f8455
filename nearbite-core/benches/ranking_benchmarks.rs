//! Criterion benchmarks for place ranking.
//!
//! Measures ranking time for typical search result sizes, from a single
//! page of results up to several merged pages.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package nearbite-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nearbite_core::{PlaceRecord, RankedResultSelector, resolve_fn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic record generation.
const BENCHMARK_SEED: u64 = 42;

/// Result set sizes to benchmark.
const RESULT_SIZES: &[usize] = &[20, 60, 200];

/// Address fragments combined into long, multi-byte addresses.
const ADDRESS_PARTS: [&str; 6] = ["東京都", "渋谷区", "神宮前", "一丁目", "二番", "三号ビル"];

/// Generate `count` places with random ratings and addresses.
fn generate_places(count: usize, seed: u64) -> Vec<PlaceRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let parts = rng.gen_range(2..=12);
            let address: String = (0..parts)
                .filter_map(|_| ADDRESS_PARTS.get(rng.gen_range(0..ADDRESS_PARTS.len())))
                .copied()
                .collect();
            PlaceRecord::new(format!("place-{i}"), address, format!("id-{i}"))
                .with_rating(rng.gen_range(0.0..=5.0), rng.gen_range(0.0..5_000.0))
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let selector = RankedResultSelector::new();
    let resolver = resolve_fn(|id: &str| format!("https://maps.example/?cid={id}"));

    for &size in RESULT_SIZES {
        let places = generate_places(size, BENCHMARK_SEED);
        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small result sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("places", size), &places, |b, places| {
            b.iter(|| black_box(selector.rank(places.clone(), &resolver)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
