//! Check Command
//!
//! Verify checksums from file (like sha256sum -c). Digests may be in text
//! or hex form.

use super::hash::hash_file;
use super::parse_digest;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Tally of a checksum run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Entries checked.
    pub total: usize,
    /// Entries that did not verify.
    pub failed: usize,
}

/// Check every `<digest>  <path>` line of `reader`, printing `OK`/`FAILED`.
pub fn check_lines<R: BufRead>(reader: R, seed: &[u8; meow::SEED_SIZE]) -> Result<Summary> {
    let mut summary = Summary::default();

    for line in reader.lines() {
        let line = line.context("Failed to read checksum file")?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected, file_path)) = line.split_once("  ") else {
            tracing::warn!("Invalid format: {line}");
            continue;
        };
        let file_path = PathBuf::from(file_path.trim());
        summary.total += 1;

        let expected = match parse_digest(expected.trim()) {
            Ok(d) => d,
            Err(e) => {
                println!("{}: FAILED ({e:#})", file_path.display());
                summary.failed += 1;
                continue;
            }
        };

        match hash_file(&file_path, seed) {
            Ok(actual) if actual == expected => println!("{}: OK", file_path.display()),
            Ok(_) => {
                println!("{}: FAILED", file_path.display());
                summary.failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({e:#})", file_path.display());
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path, seed: &[u8; meow::SEED_SIZE]) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let summary = check_lines(BufReader::new(file), seed)?;

    println!();
    if summary.failed == 0 {
        println!("All {} checksums verified", summary.total);
        Ok(())
    } else {
        anyhow::bail!(
            "WARNING: {} of {} checksums did NOT match",
            summary.failed,
            summary.total
        );
    }
}
