//! Portable implementation of Meow.
//!
//! Fully self-contained software rendition of the AES-NI kernel, producing
//! byte-identical digests on every target. Used whenever the CPU lacks AES-NI
//! and as the reference the hardware kernel is tested against.

use self::utils::{aesdec, alignr, shuffle_bytes, U128};
use crate::kernels::constants::{
    BLOCK_SIZE, HASH_SIZE, LANE_SIZE, LENGTH_ROW, MASK_LEN, MIX_SCHEDULE, NUM_LANES, RESIDUAL_ROW,
    SEED_SIZE, SHIFT_ADJUST, SHUFFLE_SCHEDULE, TRAILING_ROW, VEC_SIZE,
};

mod utils;

// =============================================================================
// STATE & TYPES
// =============================================================================

/// The eight accumulator lanes of one hash invocation.
type Lanes = [U128; NUM_LANES];

/// The four values a MIX injects: `(w, x, y, z)`.
struct Injection {
    w: U128,
    x: U128,
    y: U128,
    z: U128,
}

impl Injection {
    /// Injection for the 32-byte chunk starting at `chunk[0]`.
    ///
    /// The reads at +15 and +1 overlap the reads at +0 and +16.
    fn from_chunk(chunk: &[u8]) -> Self {
        Self {
            w: U128::load(&chunk[15..]),
            x: U128::load(&chunk[0..]),
            y: U128::load(&chunk[1..]),
            z: U128::load(&chunk[16..]),
        }
    }

    /// Injection built from two registers the way the residual and length
    /// vectors are: `w`/`y` are the `lo ‖ hi` concatenation at offsets 15 and 1.
    fn from_pair(hi: U128, lo: U128) -> Self {
        Self {
            w: alignr(hi, lo, 15),
            x: hi,
            y: alignr(hi, lo, 1),
            z: lo,
        }
    }
}

// =============================================================================
// LOGIC
// =============================================================================

/// Load the eight lanes from consecutive 16-byte groups of the seed.
fn seed_lanes(seed: &[u8; SEED_SIZE]) -> Lanes {
    let mut lanes = [U128::zero(); NUM_LANES];
    for (lane, group) in lanes.iter_mut().zip(seed.chunks_exact(VEC_SIZE)) {
        *lane = U128::load(group);
    }
    lanes
}

/// MIX on the lanes named by schedule row `row`.
fn mix_step(lanes: &mut Lanes, row: usize, inj: &Injection) {
    let [a, b, c, d, e] = MIX_SCHEDULE[row];
    lanes[a] = aesdec(lanes[a], lanes[b]);
    lanes[c] = lanes[c].add_epi64(&inj.w);
    lanes[b] = lanes[b].xor(&inj.x);
    lanes[b] = aesdec(lanes[b], lanes[d]);
    lanes[e] = lanes[e].add_epi64(&inj.y);
    lanes[d] = lanes[d].xor(&inj.z);
}

/// SHUFFLE on the lanes named by reducer row `row`.
fn shuffle_step(lanes: &mut Lanes, row: usize) {
    let [a, b, c, d, e, f] = SHUFFLE_SCHEDULE[row];
    lanes[a] = aesdec(lanes[a], lanes[d]);
    lanes[b] = lanes[b].add_epi64(&lanes[e]);
    lanes[d] = lanes[d].xor(&lanes[f]);
    lanes[d] = aesdec(lanes[d], lanes[b]);
    lanes[e] = lanes[e].add_epi64(&lanes[f]);
    lanes[b] = lanes[b].xor(&lanes[c]);
}

/// Fold every full 256-byte block, in order.
fn compress_blocks(lanes: &mut Lanes, blocks: &[u8]) {
    for block in blocks.chunks_exact(BLOCK_SIZE) {
        for (row, chunk) in block.chunks_exact(LANE_SIZE).enumerate() {
            mix_step(lanes, row, &Injection::from_chunk(chunk));
        }
    }
}

/// Load the unaligned `input.len() % 16` bytes that follow the last 16-byte
/// boundary, zero-extended to a full vector.
///
/// Never reads outside `input`: the 16-byte window is pulled back to end
/// exactly at the end of input and rotated so the wanted bytes land at the
/// front. Inputs shorter than one vector are copied into a zeroed buffer.
fn load_partial(input: &[u8]) -> U128 {
    let len = input.len();
    let partial_len = len % VEC_SIZE;
    if partial_len == 0 {
        return U128::zero();
    }

    let raw = if len >= VEC_SIZE {
        let shift = VEC_SIZE - partial_len;
        shuffle_bytes(U128::load(&input[len - VEC_SIZE..]), &SHIFT_ADJUST[shift..])
    } else {
        let mut b = [0u8; VEC_SIZE];
        b[..len].copy_from_slice(input);
        U128 { b }
    };

    let mask = U128::load(&MASK_LEN[VEC_SIZE - partial_len..]);
    raw.and(&mask)
}

/// Build the residual pair `(hi, lo)` holding the last `len % 32` bytes.
fn load_residual(input: &[u8]) -> (U128, U128) {
    let len = input.len();
    let partial = load_partial(input);
    if len & VEC_SIZE != 0 {
        let last = len & !(VEC_SIZE - 1);
        (U128::load(&input[last - VEC_SIZE..]), partial)
    } else {
        (partial, U128::zero())
    }
}

/// Residual and length injection, then the trailing 32-byte lanes.
fn absorb_tail(lanes: &mut Lanes, input: &[u8], trailing: &[u8]) {
    let (hi, lo) = load_residual(input);
    mix_step(lanes, RESIDUAL_ROW, &Injection::from_pair(hi, lo));

    // Both injections run for every length, including zero.
    let length = U128::from_u64s(input.len() as u64, 0);
    mix_step(lanes, LENGTH_ROW, &Injection::from_pair(U128::zero(), length));

    for (k, chunk) in trailing.chunks_exact(LANE_SIZE).enumerate() {
        mix_step(
            lanes,
            (TRAILING_ROW + k) % NUM_LANES,
            &Injection::from_chunk(chunk),
        );
    }
}

/// Diffuse the lanes into each other and fold them to the digest.
fn reduce(lanes: &mut Lanes) -> [u8; HASH_SIZE] {
    for row in 0..SHUFFLE_SCHEDULE.len() {
        shuffle_step(lanes, row);
    }

    lanes[0] = lanes[0].add_epi64(&lanes[2]);
    lanes[1] = lanes[1].add_epi64(&lanes[3]);
    lanes[4] = lanes[4].add_epi64(&lanes[6]);
    lanes[5] = lanes[5].add_epi64(&lanes[7]);
    lanes[0] = lanes[0].xor(&lanes[1]);
    lanes[4] = lanes[4].xor(&lanes[5]);
    lanes[0] = lanes[0].add_epi64(&lanes[4]);

    lanes[0].to_bytes()
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Portable one-shot hash.
#[must_use]
pub fn oneshot(seed: &[u8; SEED_SIZE], input: &[u8]) -> [u8; HASH_SIZE] {
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
