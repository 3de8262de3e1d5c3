//! Backend Comparison Benchmark
//!
//! Compares the runtime dispatcher against the explicit AES-NI and portable
//! kernels, with XXH3-128 and BLAKE3 as outside reference points.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use meow::kernels;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("Meow Backends");

    // Scenarios:
    // - Small (7B): tail-only path, dominated by the reducer
    // - Medium (1KB): four full blocks, L1 hot
    // - Large (256KB): bulk block throughput
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // Runtime dispatch + fastest available kernel
        group.bench_function(format!("Dispatched - {size} bytes"), |b| {
            b.iter(|| meow::hash(black_box(&input)));
        });

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if is_x86_feature_detected!("aes") && is_x86_feature_detected!("ssse3") {
            group.bench_function(format!("AES-NI Native - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::aesni::oneshot(&meow::DEFAULT_SEED, black_box(&input)) });
            });
        }

        // Software AES rounds, no SIMD
        group.bench_function(format!("Portable (No SIMD) - {size} bytes"), |b| {
            b.iter(|| kernels::portable::oneshot(&meow::DEFAULT_SEED, black_box(&input)));
        });

        group.bench_function(format!("XXH3-128 - {size} bytes"), |b| {
            b.iter(|| xxhash_rust::xxh3::xxh3_128(black_box(&input)));
        });

        group.bench_function(format!("BLAKE3 - {size} bytes"), |b| {
            b.iter(|| blake3::hash(black_box(&input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
