//! Bytes-per-Cycle (bpC) Benchmark: Meow
//!
//! Measures algorithmic efficiency using the hardware cycle counter (RDTSC).
//! x86_64 only.

#![allow(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unwrap_used)]

#[cfg(target_arch = "x86_64")]
use rayon::prelude::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::_rdtsc;
#[cfg(target_arch = "x86_64")]
use std::hint::black_box;

// =============================================================================
// UTILITIES
// =============================================================================

/// Cycles per call of `f`, averaged over `iterations`.
#[cfg(target_arch = "x86_64")]
fn cycles_per_call(iterations: u64, mut f: impl FnMut()) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        f();
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

/// RDTSC overhead to subtract from measurements.
#[cfg(target_arch = "x86_64")]
fn measure_overhead(iterations: u64) -> f64 {
    cycles_per_call(iterations, || {
        black_box(0);
    })
}

// =============================================================================
// MAIN BENCHMARK
// =============================================================================

#[cfg(target_arch = "x86_64")]
fn main() {
    println!("BENCHMARK: Single-Core Bytes/Cycle ({})", meow::active_backend());
    println!("===================================================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<12} | {:<12}",
        "Size", "Meow", "Portable", "XXH3-128", "BLAKE3"
    );
    println!("{:-<10}-+-{:-<12}-+-{:-<12}-+-{:-<12}-+-{:-<12}", "", "", "", "", "");

    let overhead = measure_overhead(1_000_000);

    let sizes = [64, 1024, 64 * 1024, 1024 * 1024, 16 * 1024 * 1024];

    for &size in &sizes {
        let input = vec![0u8; size];
        let iterations = if size < 4096 {
            500_000
        } else if size < 1024 * 1024 {
            10_000
        } else {
            100
        };
        // Software AES is far slower; keep its run short.
        let portable_iterations = (iterations / 20).max(5);

        let bpc = |cycles: f64| size as f64 / (cycles - overhead).max(1.0);

        let m = bpc(cycles_per_call(iterations, || {
            black_box(meow::hash(black_box(&input)));
        }));
        let p = bpc(cycles_per_call(portable_iterations, || {
            black_box(meow::kernels::portable::oneshot(
                &meow::DEFAULT_SEED,
                black_box(&input),
            ));
        }));
        let x = bpc(cycles_per_call(iterations, || {
            black_box(xxhash_rust::xxh3::xxh3_128(black_box(&input)));
        }));
        let b = bpc(cycles_per_call(iterations, || {
            black_box(blake3::hash(black_box(&input)));
        }));

        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<12.2} | {:<12.2}",
            format!("{size} B"),
            m,
            p,
            x,
            b
        );
    }
    println!("===================================================================================");
    println!("* Values in Bytes/Cycle (Higher is Better)");

    measure_cpu_limit();
}

#[cfg(not(target_arch = "x86_64"))]
fn main() {
    println!("bench_bpc requires x86_64 (RDTSC); skipping.");
}

// =============================================================================
// THEORETICAL LIMIT (L1 CACHE)
// =============================================================================

/// Every core hashing its own 32KB buffer, which stays in L1.
#[cfg(target_arch = "x86_64")]
fn measure_cpu_limit() {
    println!("\nCPU SCALING LIMIT (L1 Cache Test - 32KB per Thread)");
    println!("===========================================================");
    println!("{:<15} | {:<12} | {:<12}", "Hash", "Peak bpC", "Est. GB/s @ 4GHz");
    println!("{:-<15}-+-{:-<12}-+-{:-<12}", "", "", "");

    let num_threads = rayon::current_num_threads();
    let chunk_size = 32 * 1024;
    let iterations = 100_000;
    let total_bytes = num_threads as f64 * chunk_size as f64 * iterations as f64;

    let run_bench = |name: &str, func: fn(&[u8])| {
        let start = unsafe { _rdtsc() };
        (0..num_threads).into_par_iter().for_each(|_| {
            let buf = vec![0u8; chunk_size];
            for _ in 0..iterations {
                func(black_box(&buf));
            }
        });
        let end = unsafe { _rdtsc() };
        let bpc = total_bytes / (end - start) as f64;
        println!("{:<15} | {:<12.2} | {:<12.0}", name, bpc, bpc * 4.0);
    };

    run_bench("Meow", |d| {
        black_box(meow::hash(d));
    });
    run_bench("XXH3-128", |d| {
        black_box(xxhash_rust::xxh3::xxh3_128(d));
    });
    run_bench("BLAKE3", |d| {
        black_box(blake3::hash(d));
    });

    println!("===========================================================");
    println!("* Working set fits in cache; RAM bandwidth is not a factor.");
}
