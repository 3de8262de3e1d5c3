//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use super::{render, Format};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to open: {}", path.display()))
}

/// Read and hash one file.
pub fn hash_file(path: &Path, seed: &[u8; meow::SEED_SIZE]) -> Result<[u8; meow::HASH_SIZE]> {
    let start = Instant::now();
    let data = read_file(path)?;
    let hash = meow::hash_seeded(seed, &data);
    tracing::debug!(
        path = %path.display(),
        bytes = data.len(),
        elapsed = ?start.elapsed(),
        "hashed file"
    );
    Ok(hash)
}

/// Hash files (Rayon parallelizes automatically when beneficial).
///
/// Results print in argument order as `<digest>  <path>`.
pub fn hash_files(files: &[PathBuf], seed: &[u8; meow::SEED_SIZE], format: Format) -> Result<()> {
    tracing::info!(count = files.len(), "hashing files");

    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, hash_file(path, seed)))
        .collect();

    let mut failed = 0usize;
    for (path, result) in results {
        match result {
            Ok(hash) => println!("{}  {}", render(&hash, format), path.display()),
            Err(e) => {
                eprintln!("Error: {e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
