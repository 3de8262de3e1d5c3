//! AES-NI Lane State
//!
//! Lane seeding plus the two round functions (MIX and SHUFFLE) shared by the
//! block mixer, the tail handler and the reducer.

#![allow(clippy::similar_names)]

use crate::kernels::constants::{
    MIX_SCHEDULE, NUM_LANES, SEED_SIZE, SHUFFLE_SCHEDULE, VEC_SIZE,
};

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m128i, _mm_add_epi64, _mm_aesdec_si128, _mm_alignr_epi8, _mm_loadu_si128, _mm_xor_si128,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128i, _mm_add_epi64, _mm_aesdec_si128, _mm_alignr_epi8, _mm_loadu_si128, _mm_xor_si128,
};

// =============================================================================
// TYPES
// =============================================================================

/// The eight accumulator lanes of one hash invocation.
pub type Lanes = [__m128i; NUM_LANES];

/// The four values a MIX injects: `(w, x, y, z)`.
pub struct Injection {
    w: __m128i,
    x: __m128i,
    y: __m128i,
    z: __m128i,
}

// =============================================================================
// LOADS
// =============================================================================

/// Unaligned load of the first 16 bytes of `src`.
///
/// Slicing panics instead of reading past `src` when it is too short.
// SAFETY: Requires SSE2. The pointer comes from a bounds-checked 16-byte slice.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn load(src: &[u8]) -> __m128i {
    let bytes = &src[..VEC_SIZE];
    _mm_loadu_si128(bytes.as_ptr().cast())
}

/// Load the eight lanes from consecutive 16-byte groups of the seed.
// SAFETY: Requires SSE2. Every group of a 128-byte seed is exactly 16 bytes.
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn seed_lanes(seed: &[u8; SEED_SIZE]) -> Lanes {
    core::array::from_fn(|i| load(&seed[i * VEC_SIZE..]))
}

// =============================================================================
// INJECTIONS
// =============================================================================

impl Injection {
    /// Injection for the 32-byte chunk starting at `chunk[0]`: reads at
    /// +15, +0, +1 and +16.
    // SAFETY: Requires SSE2. `load` bounds-checks each 16-byte window.
    #[inline]
    #[target_feature(enable = "sse2")]
    #[allow(unsafe_code)]
    pub unsafe fn from_chunk(chunk: &[u8]) -> Self {
        Self {
            w: load(&chunk[15..]),
            x: load(chunk),
            y: load(&chunk[1..]),
            z: load(&chunk[16..]),
        }
    }

    /// Injection built from a register pair: `w`/`y` are `lo ‖ hi` at byte
    /// offsets 15 and 1, `x` is `hi`, `z` is `lo`.
    // SAFETY: Requires SSSE3 for PALIGNR. Register-only.
    #[inline]
    #[target_feature(enable = "ssse3")]
    #[allow(unsafe_code)]
    pub unsafe fn from_pair(hi: __m128i, lo: __m128i) -> Self {
        Self {
            w: _mm_alignr_epi8::<15>(hi, lo),
            x: hi,
            y: _mm_alignr_epi8::<1>(hi, lo),
            z: lo,
        }
    }
}

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// MIX on the lanes named by schedule row `row`.
// SAFETY: Requires AES/SSE2. Register-only; lane indices come from the
// const schedule and are all below `NUM_LANES`.
#[inline]
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn mix_step(lanes: &mut Lanes, row: usize, inj: &Injection) {
    let [a, b, c, d, e] = MIX_SCHEDULE[row];
    lanes[a] = _mm_aesdec_si128(lanes[a], lanes[b]);
    lanes[c] = _mm_add_epi64(lanes[c], inj.w);
    lanes[b] = _mm_xor_si128(lanes[b], inj.x);
    lanes[b] = _mm_aesdec_si128(lanes[b], lanes[d]);
    lanes[e] = _mm_add_epi64(lanes[e], inj.y);
    lanes[d] = _mm_xor_si128(lanes[d], inj.z);
}

/// SHUFFLE on the lanes named by reducer row `row`.
// SAFETY: Requires AES/SSE2. Register-only.
#[inline]
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn shuffle_step(lanes: &mut Lanes, row: usize) {
    let [a, b, c, d, e, f] = SHUFFLE_SCHEDULE[row];
    lanes[a] = _mm_aesdec_si128(lanes[a], lanes[d]);
    lanes[b] = _mm_add_epi64(lanes[b], lanes[e]);
    lanes[d] = _mm_xor_si128(lanes[d], lanes[f]);
    lanes[d] = _mm_aesdec_si128(lanes[d], lanes[b]);
    lanes[e] = _mm_add_epi64(lanes[e], lanes[f]);
    lanes[b] = _mm_xor_si128(lanes[b], lanes[c]);
}
