#![cfg_attr(not(feature = "std"), no_std)]

//! # Meow
//!
//! Fast 128-bit non-cryptographic hash built on AES decryption rounds
//! (construction 0.5/calico). Intended for content identification,
//! deduplication and change detection.
//!
//! Accelerated by AES-NI on x86/x86_64, with a bit-identical portable fallback.

//! # Usage
//! ```rust
//! // 1. Fast Hashing
//! let hash = meow::hash(b"Performance Matters");
//! println!("{}", meow::hash_text(&hash));
//!
//! // 2. Verification
//! assert!(meow::verify(b"Performance Matters", &hash));
//!
//! // 3. Streaming (buffers, then hashes once)
//! use meow::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"Performance ");
//! hasher.update(b"Matters");
//! assert_eq!(hasher.finalize(), hash);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
#[cfg(feature = "std")]
mod ffi;
// Re-export internal kernels for benchmarking/testing, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
mod streaming;
mod text;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use kernels::constants::{DEFAULT_SEED, HASH_SIZE, SEED_SIZE, VERSION, VERSION_NAME};
pub use oneshot::{hash, hash_seeded, hash_with_seed_slice, verify, verify_seeded};
pub use streaming::MeowHasher as Hasher;
pub use text::{hash_text, parse_hash_text, HashText};
pub use types::{ParseHashError, ParseHashErrorKind, SeedLengthError};

/// Returns the name of the hardware backend currently in use
/// (`"AES-NI"` or `"Portable"`).
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name().trim_end_matches('\0')
}
