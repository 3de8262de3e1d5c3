//! AES-NI Kernel Module
//!
//! Hardware implementation of Meow using AES-NI and SSSE3 instructions.
//! Eight XMM registers carry the lanes; every phase mirrors the portable
//! kernel one instruction per primitive.

// =============================================================================
// MODULES
// =============================================================================

mod compress;
mod finalize;
mod state;
mod tail;

// =============================================================================
// EXPORTS
// =============================================================================

pub use finalize::oneshot;
