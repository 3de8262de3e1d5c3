//! C-API Bindings
//!
//! Exposes Meow to C/C++ via FFI with pointer safety and panic boundaries.

#![allow(unsafe_code)]

use crate::kernels::constants::{HASH_SIZE, SEED_SIZE};
use crate::oneshot;
use crate::streaming::MeowHasher;
use crate::text::HashText;

use std::ptr;
use std::slice;

// =============================================================================
// RETURN CODES
// =============================================================================

const OK: i32 = 0;
const ERR_NULL: i32 = -1;
const ERR_PANIC: i32 = -2;
const ERR_BUFFER_TOO_SMALL: i32 = -3;

/// Borrow `len` bytes at `ptr`. A null pointer is only valid for `len == 0`.
///
/// # Safety
/// A non-null `ptr` must be valid for `len` readable bytes for `'a`.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return if len == 0 { Some(&[][..]) } else { None };
    }
    Some(slice::from_raw_parts(ptr, len))
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute the Meow hash with the default seed.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn meow_hash(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if output_ptr.is_null() {
        return ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let hash = oneshot::hash(input);
        ptr::copy_nonoverlapping(hash.as_ptr(), output_ptr, HASH_SIZE);
    });

    match result {
        Ok(()) => OK,
        Err(_) => ERR_PANIC,
    }
}

/// Compute the Meow hash with a 128-byte seed.
///
/// # Safety
/// - `seed_ptr` must point to exactly 128 readable bytes
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn meow_hash_seeded(
    seed_ptr: *const u8,
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if seed_ptr.is_null() || output_ptr.is_null() {
        return ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let seed = &*seed_ptr.cast::<[u8; SEED_SIZE]>();
        let hash = oneshot::hash_seeded(seed, input);
        ptr::copy_nonoverlapping(hash.as_ptr(), output_ptr, HASH_SIZE);
    });

    match result {
        Ok(()) => OK,
        Err(_) => ERR_PANIC,
    }
}

/// Write the text form of a digest as a NUL-terminated string.
///
/// At most 36 bytes are written (35 characters plus NUL).
///
/// # Safety
/// - `hash_ptr` must point to exactly 16 readable bytes
/// - `out_ptr` must be valid for `out_len` writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
/// - `-3`: `out_len` too small for the text and its terminator
#[no_mangle]
pub unsafe extern "C" fn meow_hash_text(
    hash_ptr: *const u8,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    if hash_ptr.is_null() || out_ptr.is_null() {
        return ERR_NULL;
    }

    let result = std::panic::catch_unwind(|| {
        let hash = &*hash_ptr.cast::<[u8; HASH_SIZE]>();
        let text = HashText(hash).to_string();
        if text.len() + 1 > out_len {
            return ERR_BUFFER_TOO_SMALL;
        }
        ptr::copy_nonoverlapping(text.as_ptr(), out_ptr, text.len());
        *out_ptr.add(text.len()) = 0;
        OK
    });

    result.unwrap_or(ERR_PANIC)
}

// =============================================================================
// STREAMING API
// =============================================================================

/// Opaque hasher handle for C.
pub struct MeowHasherPtr(MeowHasher);

/// Create a new hasher with the default seed.
/// Caller must release it with `meow_hasher_finalize` or `meow_hasher_free`.
#[no_mangle]
pub extern "C" fn meow_hasher_new() -> *mut MeowHasherPtr {
    Box::into_raw(Box::new(MeowHasherPtr(MeowHasher::new())))
}

/// Create a new hasher with a 128-byte seed. Returns NULL if `seed_ptr` is null.
///
/// # Safety
/// - `seed_ptr` must point to exactly 128 readable bytes
#[no_mangle]
pub unsafe extern "C" fn meow_hasher_new_seeded(seed_ptr: *const u8) -> *mut MeowHasherPtr {
    if seed_ptr.is_null() {
        return ptr::null_mut();
    }
    let seed = &*seed_ptr.cast::<[u8; SEED_SIZE]>();
    Box::into_raw(Box::new(MeowHasherPtr(MeowHasher::with_seed(seed))))
}

/// Feed data into the hasher.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `meow_hasher_new*`
/// - `data_ptr` must be valid for `len` bytes (may be null if `len == 0`)
#[no_mangle]
pub unsafe extern "C" fn meow_hasher_update(
    state_ptr: *mut MeowHasherPtr,
    data_ptr: *const u8,
    len: usize,
) {
    if state_ptr.is_null() {
        return;
    }
    let Some(data) = input_slice(data_ptr, len) else {
        return;
    };
    (*state_ptr).0.update(data);
}

/// Finalize and write the hash. Frees the hasher; do not call
/// `meow_hasher_free` afterwards.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `meow_hasher_new*`
/// - `out_ptr` must be valid for 16 writable bytes
#[no_mangle]
pub unsafe extern "C" fn meow_hasher_finalize(state_ptr: *mut MeowHasherPtr, out_ptr: *mut u8) {
    if state_ptr.is_null() || out_ptr.is_null() {
        return;
    }
    let handle = Box::from_raw(state_ptr);
    let hash = handle.0.finalize();
    ptr::copy_nonoverlapping(hash.as_ptr(), out_ptr, HASH_SIZE);
}

/// Free a hasher without finalizing.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `meow_hasher_new*`, or null
#[no_mangle]
pub unsafe extern "C" fn meow_hasher_free(state_ptr: *mut MeowHasherPtr) {
    if !state_ptr.is_null() {
        drop(Box::from_raw(state_ptr));
    }
}

/// Get the name of the active backend.
///
/// # Returns
/// A pointer to a static, NUL-terminated C string (`"AES-NI"` or
/// `"Portable"`). Must NOT be freed by the caller.
#[no_mangle]
pub extern "C" fn meow_get_backend_name() -> *const std::os::raw::c_char {
    let name = crate::engine::get_active_backend_name();
    name.as_ptr().cast::<std::os::raw::c_char>()
}
