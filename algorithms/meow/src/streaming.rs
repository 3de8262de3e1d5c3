//! Streaming Hasher
//!
//! Buffering adapter over the one-shot engine. Meow is not an incremental
//! construction: every written byte is kept and the kernel runs once over the
//! whole buffer at finalize time, so streaming and one-shot digests always
//! agree.

use core::fmt;

use crate::kernels::constants::{BLOCK_SIZE, DEFAULT_SEED, HASH_SIZE, SEED_SIZE};
use crate::oneshot::hash_seeded;

#[cfg(feature = "digest-trait")]
use crypto_common::{Key, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::{U128, U16};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, KeyInit, OutputSizeUser, Reset, Update};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming hasher that accumulates input and hashes it in one pass.
#[derive(Clone)]
pub struct MeowHasher {
    /// Every byte written since construction or the last reset.
    buffer: Vec<u8>,
    seed: [u8; SEED_SIZE],
}

impl MeowHasher {
    /// Digest size in bytes.
    pub const OUTPUT_SIZE: usize = HASH_SIZE;

    /// Size of one block of the mixing loop, in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher using the published default seed.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seed(&DEFAULT_SEED)
    }

    /// Create a hasher with a caller-supplied seed.
    #[must_use]
    pub const fn with_seed(seed: &[u8; SEED_SIZE]) -> Self {
        Self {
            buffer: Vec::new(),
            seed: *seed,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Append data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Consume the hasher and return the digest of everything written.
    #[must_use]
    pub fn finalize(self) -> [u8; HASH_SIZE] {
        self.sum()
    }

    /// Digest of everything written so far. Writing may continue afterwards.
    #[must_use]
    pub fn sum(&self) -> [u8; HASH_SIZE] {
        hash_seeded(&self.seed, &self.buffer)
    }

    /// Discard all written data. The seed is kept.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Number of bytes written since construction or the last reset.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// `true` when nothing has been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for MeowHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MeowHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeowHasher")
            .field("len", &self.buffer.len())
            .field("default_seed", &(self.seed == DEFAULT_SEED))
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "std")]
impl std::io::Write for MeowHasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for MeowHasher {
    type OutputSize = U16;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for MeowHasher {
    type KeySize = U128;
}

#[cfg(feature = "digest-trait")]
impl Update for MeowHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for MeowHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for MeowHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for MeowHasher {}

#[cfg(feature = "digest-trait")]
impl KeyInit for MeowHasher {
    /// The key is the 128-byte seed.
    fn new(key: &Key<Self>) -> Self {
        let mut seed = [0u8; SEED_SIZE];
        seed.copy_from_slice(key.as_slice());
        Self::with_seed(&seed)
    }
}
