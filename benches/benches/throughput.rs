//! Meow Criterion Benchmark
//!
//! Latency and throughput across input sizes, streaming and helper operations.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

fn bench_sizes(c: &mut Criterion, group_name: &str, sample_size: usize, sizes: &[(usize, &str)]) {
    let mut group = c.benchmark_group(group_name);
    group.sample_size(sample_size);

    for &(size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| meow::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (table keys, IDs). Sizes straddle the
/// 16/32/256-byte tail boundaries.
fn bench_latency(c: &mut Criterion) {
    bench_sizes(
        c,
        "1-Latency",
        100,
        &[
            (0, "0B"),
            (15, "15B"),
            (16, "16B"),
            (33, "33B"),
            (255, "255B"),
            (256, "256B"),
            (KB, "1KB"),
            (4 * KB, "4KB"),
        ],
    );
}

// =============================================================================
// BENCHMARK 2: FILES
// =============================================================================

/// Throughput for small files (source files, database pages).
fn bench_small_files(c: &mut Criterion) {
    bench_sizes(
        c,
        "2-Small-Files",
        100,
        &[
            (8 * KB, "8KB"),
            (32 * KB, "32KB"),
            (128 * KB, "128KB"),
            (256 * KB, "256KB"),
        ],
    );
}

/// Throughput for larger files, up to RAM-bound sizes.
fn bench_large_files(c: &mut Criterion) {
    bench_sizes(
        c,
        "3-Large-Files",
        20,
        &[
            (MB, "1MB"),
            (8 * MB, "8MB"),
            (64 * MB, "64MB"),
            (256 * MB, "256MB"),
        ],
    );
}

// =============================================================================
// BENCHMARK 4: STREAMING
// =============================================================================

/// Cost of the buffering hasher compared with a single one-shot call.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Streaming");
    group.sample_size(50);

    let test_cases = [
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (MB, 64 * KB, "1MB-64KB-chunks"),
        (16 * MB, 256 * KB, "16MB-256KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = meow::Hasher::new();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: SPECIAL OPERATIONS
// =============================================================================

/// Seeded hashing, constant-time verification and the text form.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Special-Operations");

    let size = 64 * KB;
    let input = random_input(size);
    let mut seed = [0u8; meow::SEED_SIZE];
    rand::rng().fill(&mut seed[..]);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("regular-hash", |b| {
        b.iter(|| meow::hash(black_box(&input)))
    });

    group.bench_function("seeded-hash", |b| {
        b.iter(|| meow::hash_seeded(black_box(&seed), black_box(&input)))
    });

    let hash = meow::hash(&input);
    group.bench_function("verify", |b| {
        b.iter(|| meow::verify(black_box(&input), black_box(&hash)))
    });

    let text = meow::hash_text(&hash).to_string();
    group.bench_function("text-roundtrip", |b| {
        b.iter(|| meow::parse_hash_text(&meow::hash_text(black_box(&hash)).to_string()))
    });
    group.bench_function("hex-encode", |b| b.iter(|| hex::encode(black_box(hash))));
    group.bench_function("text-parse", |b| {
        b.iter(|| meow::parse_hash_text(black_box(&text)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_small_files,
    bench_large_files,
    bench_streaming,
    bench_special_operations,
);
criterion_main!(benches);
