//! Hardware Dispatcher
//!
//! Selects the fastest available kernel (AES-NI or portable) for the current CPU.

use crate::kernels;
use crate::kernels::constants::{HASH_SIZE, SEED_SIZE};
use crate::types::KernelFn;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest kernel for this CPU.
#[must_use]
pub fn get_best_kernel() -> KernelFn {
    // 1. Runtime Dispatch (Std-only)
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if has_aesni() {
            return safe_aesni_wrapper;
        }
    }

    // 2. Compile-Time Dispatch (no_std)
    #[cfg(all(
        not(feature = "std"),
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "aes",
        target_feature = "sse2",
        target_feature = "ssse3"
    ))]
    {
        return safe_aesni_wrapper;
    }

    // 3. Portable Fallback
    #[allow(unreachable_code)]
    kernels::portable::oneshot
}

/// Returns the name of the active hardware backend, NUL-terminated for the
/// C ABI.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if has_aesni() {
            return "AES-NI\0";
        }
    }

    #[cfg(all(
        not(feature = "std"),
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "aes",
        target_feature = "sse2",
        target_feature = "ssse3"
    ))]
    {
        return "AES-NI\0";
    }

    #[allow(unreachable_code)]
    "Portable\0"
}

#[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
fn has_aesni() -> bool {
    is_x86_feature_detected!("aes")
        && is_x86_feature_detected!("sse2")
        && is_x86_feature_detected!("ssse3")
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AES-NI wrapper with the safe `KernelFn` signature.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn safe_aesni_wrapper(seed: &[u8; SEED_SIZE], input: &[u8]) -> [u8; HASH_SIZE] {
    // SAFETY: Only reachable after CPUID validation (AES/SSE2/SSSE3) or when
    // those features are enabled at compile time.
    unsafe { kernels::aesni::oneshot(seed, input) }
}
