//! Portable software implementation of the SIMD primitives Meow relies on:
//! the AES decryption round, 64-bit lanewise addition, byte alignment and
//! byte shuffling.

use crate::kernels::constants::VEC_SIZE;

// AES inverse S-Box
#[rustfmt::skip]
const INV_SBOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d
];

/// A 128-bit lane, stored as 16 bytes in memory order (byte 0 is the least
/// significant byte of the low 64-bit half).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct U128 {
    pub b: [u8; VEC_SIZE],
}

impl U128 {
    pub const fn zero() -> Self {
        Self { b: [0; VEC_SIZE] }
    }

    pub fn from_u64s(lo: u64, hi: u64) -> Self {
        let mut b = [0u8; VEC_SIZE];
        b[0..8].copy_from_slice(&lo.to_le_bytes());
        b[8..16].copy_from_slice(&hi.to_le_bytes());
        Self { b }
    }

    /// Load 16 bytes from the front of `src`. Callers pass slices of at least
    /// `VEC_SIZE` bytes.
    pub fn load(src: &[u8]) -> Self {
        let mut b = [0u8; VEC_SIZE];
        b.copy_from_slice(&src[..VEC_SIZE]);
        Self { b }
    }

    pub const fn to_bytes(self) -> [u8; VEC_SIZE] {
        self.b
    }

    fn halves(&self) -> (u64, u64) {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&self.b[0..8]);
        hi.copy_from_slice(&self.b[8..16]);
        (u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }

    pub fn xor(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for (i, res_i) in res.b.iter_mut().enumerate() {
            *res_i = self.b[i] ^ other.b[i];
        }
        res
    }

    pub fn and(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for (i, res_i) in res.b.iter_mut().enumerate() {
            *res_i = self.b[i] & other.b[i];
        }
        res
    }

    /// Two independent wrapping 64-bit additions (no carry between halves).
    pub fn add_epi64(&self, other: &Self) -> Self {
        let (a_lo, a_hi) = self.halves();
        let (b_lo, b_hi) = other.halves();
        Self::from_u64s(a_lo.wrapping_add(b_lo), a_hi.wrapping_add(b_hi))
    }
}

/// GF(2^8) multiplication by 2.
/// Branchless: `b >> 7` extracts the MSB as 0 or 1; multiplying by `GF_POLY`
/// produces the conditional reduction polynomial without a data-dependent branch.
const fn gf_double(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7) * crate::kernels::constants::GF_POLY)
}

/// AES `InvMixColumns` on a single 4-byte column.
fn inv_mix_column(c: &mut [u8]) {
    let t = [c[0], c[1], c[2], c[3]];
    let x2 = t.map(gf_double);
    let x4 = x2.map(gf_double);
    let x8 = x4.map(gf_double);
    // 9 = 8+1, 11 = 8+2+1, 13 = 8+4+1, 14 = 8+4+2
    let m9 = |i: usize| x8[i] ^ t[i];
    let m11 = |i: usize| x8[i] ^ x2[i] ^ t[i];
    let m13 = |i: usize| x8[i] ^ x4[i] ^ t[i];
    let m14 = |i: usize| x8[i] ^ x4[i] ^ x2[i];
    c[0] = m14(0) ^ m11(1) ^ m13(2) ^ m9(3);
    c[1] = m9(0) ^ m14(1) ^ m11(2) ^ m13(3);
    c[2] = m13(0) ^ m9(1) ^ m14(2) ^ m11(3);
    c[3] = m11(0) ^ m13(1) ^ m9(2) ^ m14(3);
}

/// One AES decryption round, bit-identical to `AESDEC`.
pub fn aesdec(state: U128, key: U128) -> U128 {
    let mut s = state.b;

    // InvShiftRows
    // Row 0: No shift
    // Row 1: Shift right 1
    let tmp = s[13];
    s[13] = s[9];
    s[9] = s[5];
    s[5] = s[1];
    s[1] = tmp;
    // Row 2: Shift right 2
    s.swap(2, 10);
    s.swap(6, 14);
    // Row 3: Shift right 3 (left 1)
    let tmp = s[3];
    s[3] = s[7];
    s[7] = s[11];
    s[11] = s[15];
    s[15] = tmp;

    // InvSubBytes
    for b in &mut s {
        *b = INV_SBOX[*b as usize];
    }

    // InvMixColumns
    inv_mix_column(&mut s[0..4]);
    inv_mix_column(&mut s[4..8]);
    inv_mix_column(&mut s[8..12]);
    inv_mix_column(&mut s[12..16]);

    // AddRoundKey
    U128 { b: s }.xor(&key)
}

/// Bytes `k..k + 16` of the 32-byte value `lo ‖ hi` (`PALIGNR` semantics).
pub fn alignr(hi: U128, lo: U128, k: usize) -> U128 {
    let mut cat = [0u8; 2 * VEC_SIZE];
    cat[..VEC_SIZE].copy_from_slice(&lo.b);
    cat[VEC_SIZE..].copy_from_slice(&hi.b);
    U128::load(&cat[k..])
}

/// `result[i] = v[table[i] & 0x0F]` (`PSHUFB` semantics for tables without the
/// high bit set).
pub fn shuffle_bytes(v: U128, table: &[u8]) -> U128 {
    let mut res = U128::zero();
    for (res_i, &t) in res.b.iter_mut().zip(&table[..VEC_SIZE]) {
        *res_i = v.b[usize::from(t & 0x0F)];
    }
    res
}
