//! AES-NI Tail Loads
//!
//! Extracts the last `len % 32` bytes of the input as a register pair without
//! touching memory outside the input slice.

use super::state::load;
use crate::kernels::constants::{MASK_LEN, SHIFT_ADJUST, VEC_SIZE};

#[cfg(target_arch = "x86")]
use core::arch::x86::{__m128i, _mm_and_si128, _mm_setzero_si128, _mm_shuffle_epi8};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{__m128i, _mm_and_si128, _mm_setzero_si128, _mm_shuffle_epi8};

/// The `len % 16` bytes after the last 16-byte boundary, zero-extended.
///
/// With at least one full vector of input, the window ending at the end of
/// input is loaded and rotated left by `16 - partial` bytes (PSHUFB with a
/// `SHIFT_ADJUST` window). Shorter inputs go through a zeroed stack buffer.
// SAFETY: Requires SSE2/SSSE3. All loads go through `load`, which
// bounds-checks its slice; the short path reads a local buffer.
#[target_feature(enable = "sse2")]
#[target_feature(enable = "ssse3")]
#[allow(unsafe_code)]
pub unsafe fn load_partial(input: &[u8]) -> __m128i {
    let len = input.len();
    let partial_len = len % VEC_SIZE;
    if partial_len == 0 {
        return _mm_setzero_si128();
    }

    let raw = if len >= VEC_SIZE {
        let shift = VEC_SIZE - partial_len;
        _mm_shuffle_epi8(load(&input[len - VEC_SIZE..]), load(&SHIFT_ADJUST[shift..]))
    } else {
        let mut buf = [0u8; VEC_SIZE];
        buf[..len].copy_from_slice(input);
        load(&buf)
    };

    _mm_and_si128(raw, load(&MASK_LEN[VEC_SIZE - partial_len..]))
}

/// Residual pair `(hi, lo)`: when bit 4 of the length is set, `hi` is the
/// aligned vector before the partial bytes and `lo` the partial bytes;
/// otherwise `hi` holds the partial bytes and `lo` is zero.
// SAFETY: Requires SSE2/SSSE3. `last - 16` is in bounds whenever bit 4 of
// the length is set.
#[target_feature(enable = "sse2")]
#[target_feature(enable = "ssse3")]
#[allow(unsafe_code)]
pub unsafe fn load_residual(input: &[u8]) -> (__m128i, __m128i) {
    let len = input.len();
    let partial = load_partial(input);
    if len & VEC_SIZE == 0 {
        return (partial, _mm_setzero_si128());
    }
    let last = len & !(VEC_SIZE - 1);
    (load(&input[last - VEC_SIZE..]), partial)
}
