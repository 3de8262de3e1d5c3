//! Meow Kernel Constants
//!
//! Sizes, the published default seed, and the lane schedules shared by every
//! backend. The schedules are plain index tables so the block mixer, the tail
//! handler and the reducer all read the same source of truth.
//!
//! The default seed is a "nothing-up-my-sleeve" number: the hexadecimal
//! expansion of π (`3.243F6A8885A308D3...`) packed nibble by nibble.

// =============================================================================
// VERSION
// =============================================================================

/// Construction version of the published algorithm.
pub const VERSION: u32 = 5;

/// Human-readable construction name.
pub const VERSION_NAME: &str = "0.5/calico";

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Seed size in bytes (eight 128-bit lanes).
pub const SEED_SIZE: usize = 128;

/// Hash output size in bytes (128-bit digest).
pub const HASH_SIZE: usize = 16;

/// Block size for the main mixing loop (in bytes).
pub const BLOCK_SIZE: usize = 256;

/// Bytes consumed by one MIX application.
pub const LANE_SIZE: usize = 32;

/// Number of 128-bit accumulator lanes.
pub const NUM_LANES: usize = 8;

/// Size of a single 128-bit vector in bytes.
pub const VEC_SIZE: usize = 16;

/// AES GF(2^8) reduction polynomial: x^8 + x^4 + x^3 + x + 1
pub const GF_POLY: u8 = 0x1b;

// =============================================================================
// DEFAULT SEED
// =============================================================================

/// Published default seed (an encoding of π).
#[rustfmt::skip]
pub const DEFAULT_SEED: [u8; SEED_SIZE] = [
    0x32, 0x43, 0xF6, 0xA8, 0x88, 0x5A, 0x30, 0x8D,
    0x31, 0x31, 0x98, 0xA2, 0xE0, 0x37, 0x07, 0x34,
    0x4A, 0x40, 0x93, 0x82, 0x22, 0x99, 0xF3, 0x1D,
    0x00, 0x82, 0xEF, 0xA9, 0x8E, 0xC4, 0xE6, 0xC8,
    0x94, 0x52, 0x82, 0x1E, 0x63, 0x8D, 0x01, 0x37,
    0x7B, 0xE5, 0x46, 0x6C, 0xF3, 0x4E, 0x90, 0xC6,
    0xCC, 0x0A, 0xC2, 0x9B, 0x7C, 0x97, 0xC5, 0x0D,
    0xD3, 0xF8, 0x4D, 0x5B, 0x5B, 0x54, 0x70, 0x91,
    0x79, 0x21, 0x6D, 0x5D, 0x98, 0x97, 0x9F, 0xB1,
    0xBD, 0x13, 0x10, 0xBA, 0x69, 0x8D, 0xFB, 0x5A,
    0xC2, 0xFF, 0xD7, 0x2D, 0xBD, 0x01, 0xAD, 0xFB,
    0x7B, 0x8E, 0x1A, 0xFE, 0xD6, 0xA2, 0x67, 0xE9,
    0x6B, 0xA7, 0xC9, 0x04, 0x5F, 0x12, 0xC7, 0xF9,
    0x92, 0x4A, 0x19, 0x94, 0x7B, 0x39, 0x16, 0xCF,
    0x70, 0x80, 0x1F, 0x2E, 0x28, 0x58, 0xEF, 0xC1,
    0x66, 0x36, 0x92, 0x0D, 0x87, 0x15, 0x74, 0xE6,
];

// =============================================================================
// LANE SCHEDULES
// =============================================================================

/// MIX lane quintuples `(a, b, c, d, e)`.
///
/// Row `i` is `(i, i+4, i+6, i+1, i+2) mod 8`. Blocks walk rows 0..8 in order;
/// the residual uses row 0, the length row 1, and trailing 32-byte lanes
/// continue from row 2.
pub const MIX_SCHEDULE: [[usize; 5]; NUM_LANES] = [
    [0, 4, 6, 1, 2],
    [1, 5, 7, 2, 3],
    [2, 6, 0, 3, 4],
    [3, 7, 1, 4, 5],
    [4, 0, 2, 5, 6],
    [5, 1, 3, 6, 7],
    [6, 2, 4, 7, 0],
    [7, 3, 5, 0, 1],
];

/// Schedule row used for the residual injection.
pub const RESIDUAL_ROW: usize = 0;

/// Schedule row used for the length injection.
pub const LENGTH_ROW: usize = 1;

/// Schedule row of the first trailing 32-byte lane.
pub const TRAILING_ROW: usize = 2;

/// Number of SHUFFLE applications in the reducer.
pub const SHUFFLE_ROUNDS: usize = 12;

/// SHUFFLE lane sextuples `(a, b, c, d, e, f)`.
///
/// Row `i` is `(i, i+1, i+2, i+4, i+5, i+6) mod 8`, for `i = 0..8` and then
/// `i = 0..4` again.
pub const SHUFFLE_SCHEDULE: [[usize; 6]; SHUFFLE_ROUNDS] = [
    [0, 1, 2, 4, 5, 6],
    [1, 2, 3, 5, 6, 7],
    [2, 3, 4, 6, 7, 0],
    [3, 4, 5, 7, 0, 1],
    [4, 5, 6, 0, 1, 2],
    [5, 6, 7, 1, 2, 3],
    [6, 7, 0, 2, 3, 4],
    [7, 0, 1, 3, 4, 5],
    [0, 1, 2, 4, 5, 6],
    [1, 2, 3, 5, 6, 7],
    [2, 3, 4, 6, 7, 0],
    [3, 4, 5, 7, 0, 1],
];

// =============================================================================
// TAIL TABLES
// =============================================================================

/// Length-indexed byte mask. A 16-byte window starting at `16 - n` keeps the
/// first `n` bytes and zeroes the rest.
#[rustfmt::skip]
pub const MASK_LEN: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Byte rotation table for the backward-shifted tail read. A 16-byte window
/// starting at `shift` rotates a vector left by `shift` bytes.
#[rustfmt::skip]
pub const SHIFT_ADJUST: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
];
