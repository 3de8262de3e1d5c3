//! Digest Text Form
//!
//! Meow digests are conventionally displayed as four 32-bit words, most
//! significant word first, in uppercase hex without zero padding:
//! `1DCA5238-AEED2266-C77C0C4C-8300076B`. Word `k` is the little-endian `u32`
//! at bytes `[4k, 4k + 4)`, so the text is not a plain hex dump of the bytes.

use core::fmt;

use crate::kernels::constants::HASH_SIZE;
use crate::types::{ParseHashError, ParseHashErrorKind};

/// Number of 32-bit words in a digest.
const WORDS: usize = HASH_SIZE / 4;

/// Maximum hex digits in one word.
const MAX_DIGITS: usize = 8;

/// Displays a digest in its text form.
///
/// # Example
/// ```rust
/// let hash = meow::hash(b"");
/// assert_eq!(
///     meow::hash_text(&hash).to_string(),
///     "75A7B555-383265E-657CA02A-5859C045"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashText<'a>(pub &'a [u8; HASH_SIZE]);

impl HashText<'_> {
    fn word(&self, k: usize) -> u32 {
        let b = self.0;
        u32::from_le_bytes([b[4 * k], b[4 * k + 1], b[4 * k + 2], b[4 * k + 3]])
    }
}

impl fmt::Display for HashText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:X}-{:X}-{:X}-{:X}",
            self.word(3),
            self.word(2),
            self.word(1),
            self.word(0)
        )
    }
}

/// Wrap a digest for display in text form.
#[must_use]
pub const fn hash_text(hash: &[u8; HASH_SIZE]) -> HashText<'_> {
    HashText(hash)
}

/// Parse the text form back into digest bytes.
///
/// Accepts exactly four `-`-separated groups of 1 to 8 hex digits in either
/// case. Surrounding whitespace is not trimmed.
///
/// # Errors
/// Returns `ParseHashError` describing the first malformed group.
pub fn parse_hash_text(s: &str) -> Result<[u8; HASH_SIZE], ParseHashError> {
    let groups = s.split('-').count();
    if groups != WORDS {
        return Err(ParseHashError::new(ParseHashErrorKind::GroupCount(groups)));
    }

    let mut out = [0u8; HASH_SIZE];
    for (group, digits) in s.split('-').enumerate() {
        if digits.is_empty() || digits.len() > MAX_DIGITS {
            return Err(ParseHashError::new(ParseHashErrorKind::GroupLength {
                group,
                len: digits.len(),
            }));
        }

        let mut word = 0u32;
        for c in digits.chars() {
            let Some(v) = c.to_digit(16) else {
                return Err(ParseHashError::new(ParseHashErrorKind::InvalidDigit {
                    group,
                }));
            };
            word = (word << 4) | v;
        }

        // Group 0 is the most significant word.
        let k = WORDS - 1 - group;
        out[4 * k..4 * k + 4].copy_from_slice(&word.to_le_bytes());
    }
    Ok(out)
}
