//! Public API Layer
//!
use crate::engine::dispatcher;
use crate::kernels::constants::{DEFAULT_SEED, HASH_SIZE, SEED_SIZE};
use crate::types::SeedLengthError;
use subtle::ConstantTimeEq;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the Meow hash of `input` with the published default seed.
///
/// # Example
/// ```rust
/// let hash = meow::hash(b"Performance");
/// assert_eq!(hash.len(), 16);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    hash_seeded(&DEFAULT_SEED, input)
}

/// Compute the Meow hash of `input` with a caller-supplied 128-byte seed.
///
/// # Example
/// ```rust
/// let seed = [7u8; 128];
/// assert_ne!(meow::hash_seeded(&seed, b"data"), meow::hash(b"data"));
/// ```
#[must_use]
#[inline]
pub fn hash_seeded(seed: &[u8; SEED_SIZE], input: &[u8]) -> [u8; HASH_SIZE] {
    let kernel = dispatcher::get_best_kernel();
    kernel(seed, input)
}

/// Compute the Meow hash with a seed that arrives as a runtime slice.
///
/// Seeds are used as-is; there is no expansion of shorter seeds.
///
/// # Errors
/// Returns `SeedLengthError` unless `seed` is exactly 128 bytes.
pub fn hash_with_seed_slice(seed: &[u8], input: &[u8]) -> Result<[u8; HASH_SIZE], SeedLengthError> {
    let seed: &[u8; SEED_SIZE] = seed
        .try_into()
        .map_err(|_| SeedLengthError::new(seed.len()))?;
    Ok(hash_seeded(seed, input))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Compare the hash of `input` against `expected` in constant time.
///
/// # Example
/// ```rust
/// let data = b"Stored Data";
/// let hash = meow::hash(data);
/// assert!(meow::verify(data, &hash));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}

/// Seeded variant of [`verify`].
#[must_use]
pub fn verify_seeded(seed: &[u8; SEED_SIZE], input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash_seeded(seed, input);
    computed.ct_eq(expected).into()
}
