//! Kernel Dispatcher
//!
//! Contains the hardware-specific and portable implementations of the Meow
//! hash engine. All kernels produce bit-identical digests.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod aesni;
pub mod constants;
pub mod portable;
