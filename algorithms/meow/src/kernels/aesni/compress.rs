//! AES-NI Block Compression
//!
//! Folds every full 256-byte block into the lanes, eight MIX applications per
//! block walking the schedule rows in order.

use super::state::{mix_step, Injection, Lanes};
use crate::kernels::constants::{BLOCK_SIZE, LANE_SIZE};

/// Process all complete blocks of `blocks`, in input order.
// SAFETY: Requires AES/SSE2/SSSE3 CPU features (enforced by dispatcher).
// Chunks come from `chunks_exact`, so every 32-byte read is in bounds.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[target_feature(enable = "ssse3")]
#[allow(unsafe_code)]
pub unsafe fn compress_blocks(lanes: &mut Lanes, blocks: &[u8]) {
    for block in blocks.chunks_exact(BLOCK_SIZE) {
        for (row, chunk) in block.chunks_exact(LANE_SIZE).enumerate() {
            mix_step(lanes, row, &Injection::from_chunk(chunk));
        }
    }
}
