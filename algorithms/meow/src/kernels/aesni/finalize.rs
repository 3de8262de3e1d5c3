//! AES-NI Finalization
//!
//! Residual and length injection, trailing 32-byte lanes, the SHUFFLE
//! reducer and the final fold. Also hosts the one-shot entry point.

#![allow(clippy::cast_possible_wrap)]

use super::compress::compress_blocks;
use super::state::{mix_step, seed_lanes, shuffle_step, Injection, Lanes};
use super::tail::load_residual;
use crate::kernels::constants::{
    BLOCK_SIZE, HASH_SIZE, LANE_SIZE, LENGTH_ROW, NUM_LANES, RESIDUAL_ROW, SEED_SIZE,
    SHUFFLE_SCHEDULE, TRAILING_ROW,
};

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    _mm_add_epi64, _mm_set_epi64x, _mm_setzero_si128, _mm_storeu_si128, _mm_xor_si128,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    _mm_add_epi64, _mm_set_epi64x, _mm_setzero_si128, _mm_storeu_si128, _mm_xor_si128,
};

// =============================================================================
// TAIL HANDLER
// =============================================================================

/// Fold the residual, the length and the trailing lanes.
// SAFETY: Requires AES/SSE2/SSSE3. `trailing` is a whole number of 32-byte
// chunks; residual loads stay inside `input`.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[target_feature(enable = "ssse3")]
#[allow(unsafe_code)]
unsafe fn absorb_tail(lanes: &mut Lanes, input: &[u8], trailing: &[u8]) {
    let (hi, lo) = load_residual(input);
    mix_step(lanes, RESIDUAL_ROW, &Injection::from_pair(hi, lo));

    // Runs for every length, including zero.
    let length = _mm_set_epi64x(0, input.len() as i64);
    mix_step(
        lanes,
        LENGTH_ROW,
        &Injection::from_pair(_mm_setzero_si128(), length),
    );

    for (k, chunk) in trailing.chunks_exact(LANE_SIZE).enumerate() {
        mix_step(
            lanes,
            (TRAILING_ROW + k) % NUM_LANES,
            &Injection::from_chunk(chunk),
        );
    }
}

// =============================================================================
// REDUCER
// =============================================================================

/// Twelve SHUFFLE rounds, then fold all lanes into lane 0.
// SAFETY: Requires AES/SSE2. Writes 16 bytes into a local 16-byte array.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn reduce(lanes: &mut Lanes) -> [u8; HASH_SIZE] {
    for row in 0..SHUFFLE_SCHEDULE.len() {
        shuffle_step(lanes, row);
    }

    lanes[0] = _mm_add_epi64(lanes[0], lanes[2]);
    lanes[1] = _mm_add_epi64(lanes[1], lanes[3]);
    lanes[4] = _mm_add_epi64(lanes[4], lanes[6]);
    lanes[5] = _mm_add_epi64(lanes[5], lanes[7]);
    lanes[0] = _mm_xor_si128(lanes[0], lanes[1]);
    lanes[4] = _mm_xor_si128(lanes[4], lanes[5]);
    lanes[0] = _mm_add_epi64(lanes[0], lanes[4]);

    let mut out = [0u8; HASH_SIZE];
    _mm_storeu_si128(out.as_mut_ptr().cast(), lanes[0]);
    out
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// One-shot hash using AES-NI.
///
/// # Safety
///
/// The CPU must support AES, SSE2 and SSSE3.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[target_feature(enable = "ssse3")]
#[allow(unsafe_code)]
pub unsafe fn oneshot(seed: &[u8; SEED_SIZE], input: &[u8]) -> [u8; HASH_SIZE] {
    let len = input.len();
    let block_bytes = len / BLOCK_SIZE * BLOCK_SIZE;
    let trailing_bytes = ((len >> 5) & 0x7) * LANE_SIZE;

    let mut lanes = seed_lanes(seed);
    compress_blocks(&mut lanes, &input[..block_bytes]);
    absorb_tail(
        &mut lanes,
        input,
        &input[block_bytes..block_bytes + trailing_bytes],
    );
    reduce(&mut lanes)
}
