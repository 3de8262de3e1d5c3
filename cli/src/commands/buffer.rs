//! Test Buffer Command
//!
//! Hashes the 16,000-byte buffer `byte[i] = i mod 256`, a quick smoke test
//! whose digest is stable across versions and backends.

use super::{render, Format};

/// Size of the built-in test buffer.
const TEST_BUFFER_SIZE: usize = 16_000;

/// The built-in test buffer.
#[allow(clippy::cast_possible_truncation)]
pub fn test_buffer() -> Vec<u8> {
    (0..TEST_BUFFER_SIZE).map(|i| i as u8).collect()
}

/// Hash the test buffer and print its digest.
pub fn hash_test_buffer(seed: &[u8; meow::SEED_SIZE], format: Format) {
    let hash = meow::hash_seeded(seed, &test_buffer());
    println!("Hash of a test buffer:\n\t{}", render(&hash, format));
}
