//! CLI Commands
//!
//! All meow CLI commands organized as separate modules, plus the digest
//! formatting and seed loading they share.

mod buffer;
mod check;
mod compare;
mod hash;

pub use buffer::hash_test_buffer;
pub use check::check_mode;
pub use compare::compare_files;
pub use hash::hash_files;

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;

/// How digests are printed.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Format {
    /// Four 32-bit words, `XXXXXXXX-XXXXXXXX-XXXXXXXX-XXXXXXXX`
    Text,
    /// Lowercase hex of the 16 digest bytes
    Hex,
}

/// Render a digest in the requested format.
pub fn render(hash: &[u8; meow::HASH_SIZE], format: Format) -> String {
    match format {
        Format::Text => meow::hash_text(hash).to_string(),
        Format::Hex => hex::encode(hash),
    }
}

/// Read a seed file; it must hold exactly 128 bytes.
pub fn load_seed(path: &Path) -> Result<[u8; meow::SEED_SIZE]> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read seed: {}", path.display()))?;
    let seed = <[u8; meow::SEED_SIZE]>::try_from(bytes.as_slice())
        .map_err(|_| meow::SeedLengthError::new(bytes.len()))
        .with_context(|| format!("Invalid seed file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded custom seed");
    Ok(seed)
}

/// Parse a digest written in either output format.
pub fn parse_digest(s: &str) -> Result<[u8; meow::HASH_SIZE]> {
    if s.contains('-') {
        return Ok(meow::parse_hash_text(s)?);
    }
    let mut out = [0u8; meow::HASH_SIZE];
    hex::decode_to_slice(s, &mut out).with_context(|| format!("Invalid hex digest: {s}"))?;
    Ok(out)
}
