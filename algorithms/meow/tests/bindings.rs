//! C ABI Tests
//!
//! Calls the exported `extern "C"` functions directly, the way a C caller
//! linking the `cdylib`/`staticlib` would.

#![cfg(feature = "std")]
#![allow(unsafe_code)]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

/// Opaque handle as seen from C.
#[repr(C)]
struct MeowHasherHandle {
    _private: [u8; 0],
}

extern "C" {
    fn meow_hash(input: *const u8, len: usize, out: *mut u8) -> i32;
    fn meow_hash_seeded(seed: *const u8, input: *const u8, len: usize, out: *mut u8) -> i32;
    fn meow_hash_text(hash: *const u8, out: *mut u8, out_len: usize) -> i32;
    fn meow_hasher_new() -> *mut MeowHasherHandle;
    fn meow_hasher_new_seeded(seed: *const u8) -> *mut MeowHasherHandle;
    fn meow_hasher_update(state: *mut MeowHasherHandle, data: *const u8, len: usize);
    fn meow_hasher_finalize(state: *mut MeowHasherHandle, out: *mut u8);
    fn meow_hasher_free(state: *mut MeowHasherHandle);
    fn meow_get_backend_name() -> *const c_char;
}

// =============================================================================
// ONE-SHOT
// =============================================================================

#[test]
fn test_c_hash_matches_rust() {
    let input = b"C ABI input";
    let mut out = [0u8; 16];
    let rc = unsafe { meow_hash(input.as_ptr(), input.len(), out.as_mut_ptr()) };
    assert_eq!(rc, 0);
    assert_eq!(out, meow::hash(input));
}

#[test]
fn test_c_hash_null_handling() {
    let mut out = [0u8; 16];

    // Null input with zero length is the empty input.
    let rc = unsafe { meow_hash(ptr::null(), 0, out.as_mut_ptr()) };
    assert_eq!(rc, 0);
    assert_eq!(out, meow::hash(&[]));

    // Null input with non-zero length is rejected.
    let rc = unsafe { meow_hash(ptr::null(), 5, out.as_mut_ptr()) };
    assert_eq!(rc, -1);

    // Null output is rejected.
    let rc = unsafe { meow_hash(b"x".as_ptr(), 1, ptr::null_mut()) };
    assert_eq!(rc, -1);
}

#[test]
fn test_c_hash_seeded() {
    let seed = [9u8; 128];
    let input = b"seeded";
    let mut out = [0u8; 16];
    let rc = unsafe { meow_hash_seeded(seed.as_ptr(), input.as_ptr(), input.len(), out.as_mut_ptr()) };
    assert_eq!(rc, 0);
    assert_eq!(out, meow::hash_seeded(&seed, input));

    let rc = unsafe { meow_hash_seeded(ptr::null(), input.as_ptr(), input.len(), out.as_mut_ptr()) };
    assert_eq!(rc, -1);
}

// =============================================================================
// TEXT FORM
// =============================================================================

#[test]
fn test_c_hash_text() {
    let hash = meow::hash(&[]);
    let mut buf = [0xFFu8; 36];
    let rc = unsafe { meow_hash_text(hash.as_ptr(), buf.as_mut_ptr(), buf.len()) };
    assert_eq!(rc, 0);
    let text = CStr::from_bytes_until_nul(&buf).unwrap().to_str().unwrap();
    assert_eq!(text, "75A7B555-383265E-657CA02A-5859C045");
}

#[test]
fn test_c_hash_text_buffer_too_small() {
    let hash = meow::hash(&[]);
    // 34 characters need 35 bytes with the terminator.
    let mut buf = [0u8; 34];
    let rc = unsafe { meow_hash_text(hash.as_ptr(), buf.as_mut_ptr(), buf.len()) };
    assert_eq!(rc, -3);

    let mut buf = [0u8; 35];
    let rc = unsafe { meow_hash_text(hash.as_ptr(), buf.as_mut_ptr(), buf.len()) };
    assert_eq!(rc, 0);
}

// =============================================================================
// STREAMING
// =============================================================================

#[test]
fn test_c_streaming_matches_oneshot() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 256) as u8).collect();
    let mut out = [0u8; 16];
    unsafe {
        let h = meow_hasher_new();
        assert!(!h.is_null());
        for chunk in data.chunks(77) {
            meow_hasher_update(h, chunk.as_ptr(), chunk.len());
        }
        meow_hasher_update(h, ptr::null(), 0);
        meow_hasher_finalize(h, out.as_mut_ptr());
    }
    assert_eq!(out, meow::hash(&data));
}

#[test]
fn test_c_streaming_seeded_and_free() {
    let seed = [0x33u8; 128];
    let mut out = [0u8; 16];
    unsafe {
        assert!(meow_hasher_new_seeded(ptr::null()).is_null());

        let h = meow_hasher_new_seeded(seed.as_ptr());
        meow_hasher_update(h, b"abc".as_ptr(), 3);
        meow_hasher_finalize(h, out.as_mut_ptr());

        let unused = meow_hasher_new();
        meow_hasher_update(unused, b"dropped".as_ptr(), 7);
        meow_hasher_free(unused);
        meow_hasher_free(ptr::null_mut());
    }
    assert_eq!(out, meow::hash_seeded(&seed, b"abc"));
}

#[test]
fn test_c_backend_name() {
    let name = unsafe { CStr::from_ptr(meow_get_backend_name()) };
    assert_eq!(name.to_str().unwrap(), meow::active_backend());
}
