//! Shared types used across the Meow library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::{HASH_SIZE, SEED_SIZE};

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified kernel function signature: `(seed, input) -> hash`.
///
/// The AES-NI backend and the portable fallback implement this same
/// signature so the dispatcher can swap them at runtime.
pub type KernelFn = fn(&[u8; SEED_SIZE], &[u8]) -> [u8; HASH_SIZE];

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A seed supplied as a runtime slice was not exactly 128 bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedLengthError {
    actual: usize,
}

impl SeedLengthError {
    /// Create a new `SeedLengthError` for a seed of `actual` bytes.
    #[must_use]
    pub const fn new(actual: usize) -> Self {
        Self { actual }
    }

    /// Length of the rejected seed.
    #[must_use]
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for SeedLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed must be exactly {SEED_SIZE} bytes, got {}",
            self.actual
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for SeedLengthError {}

/// What was wrong with a digest in text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseHashErrorKind {
    /// Not exactly four `-`-separated groups.
    GroupCount(usize),
    /// A group was empty or longer than eight hex digits.
    GroupLength {
        /// Zero-based group index.
        group: usize,
        /// Number of characters found.
        len: usize,
    },
    /// A character outside `0-9`, `a-f`, `A-F`.
    InvalidDigit {
        /// Zero-based group index.
        group: usize,
    },
}

/// Error returned when parsing the `XXXXXXXX-XXXXXXXX-XXXXXXXX-XXXXXXXX`
/// text form of a digest fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseHashError {
    kind: ParseHashErrorKind,
}

impl ParseHashError {
    pub(crate) const fn new(kind: ParseHashErrorKind) -> Self {
        Self { kind }
    }

    /// The specific parse failure.
    #[must_use]
    pub const fn kind(&self) -> ParseHashErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseHashErrorKind::GroupCount(n) => {
                write!(f, "expected 4 hex groups separated by '-', found {n}")
            }
            ParseHashErrorKind::GroupLength { group, len } => {
                write!(f, "hex group {group} has {len} digits, expected 1 to 8")
            }
            ParseHashErrorKind::InvalidDigit { group } => {
                write!(f, "hex group {group} contains a non-hex character")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for ParseHashError {}

// HASH_SIZE is four u32 words; the text form depends on it.
const _: () = assert!(HASH_SIZE == 16);
