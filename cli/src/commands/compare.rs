//! Compare Command
//!
//! Hashes two files and cross-checks content equality against digest
//! equality. A disagreement between the two is a hash failure.

use super::hash::read_file;
use super::{render, Format};
use anyhow::Result;
use std::path::Path;

/// Relationship between two files and their digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Same bytes, same digest.
    Same,
    /// Different bytes, different digests.
    Different,
    /// Same bytes but different digests.
    FilesMatchHashesDiffer,
    /// Different bytes but equal digests.
    HashesMatchFilesDiffer,
}

impl Outcome {
    /// Classify from the two equality checks.
    pub const fn classify(files_match: bool, hashes_match: bool) -> Self {
        match (files_match, hashes_match) {
            (true, true) => Self::Same,
            (true, false) => Self::FilesMatchHashesDiffer,
            (false, true) => Self::HashesMatchFilesDiffer,
            (false, false) => Self::Different,
        }
    }

    /// Whether the outcome reveals a hash failure.
    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::FilesMatchHashesDiffer | Self::HashesMatchFilesDiffer
        )
    }
}

/// Hash both buffers and classify them. The digests always cover the exact
/// bytes that were compared.
pub fn compare_buffers(
    data_a: &[u8],
    data_b: &[u8],
    seed: &[u8; meow::SEED_SIZE],
) -> (Outcome, [u8; meow::HASH_SIZE], [u8; meow::HASH_SIZE]) {
    let hash_a = meow::hash_seeded(seed, data_a);
    let hash_b = meow::hash_seeded(seed, data_b);
    let outcome = Outcome::classify(data_a == data_b, hash_a == hash_b);
    (outcome, hash_a, hash_b)
}

/// Compare two files and print the outcome. Hash failures become errors.
///
/// Each file is read exactly once, so pipes and FIFOs work.
pub fn compare_files(
    a: &Path,
    b: &Path,
    seed: &[u8; meow::SEED_SIZE],
    format: Format,
) -> Result<()> {
    let data_a = read_file(a)?;
    let data_b = read_file(b)?;

    let (outcome, hash_a, hash_b) = compare_buffers(&data_a, &data_b, seed);
    tracing::debug!(
        ?outcome,
        bytes_a = data_a.len(),
        bytes_b = data_b.len(),
        "compared files"
    );

    let (name_a, name_b) = (a.display(), b.display());
    let (text_a, text_b) = (render(&hash_a, format), render(&hash_b, format));

    match outcome {
        Outcome::Same => {
            println!("Files \"{name_a}\" and \"{name_b}\" are the same:\n\t{text_a}");
        }
        Outcome::FilesMatchHashesDiffer => {
            println!("MEOW HASH FAILURE: Files match but hashes don't!");
            println!("\tHash of \"{name_a}\":\n\t {text_a}");
            println!("\tHash of \"{name_b}\":\n\t {text_b}");
        }
        Outcome::HashesMatchFilesDiffer => {
            println!("MEOW HASH FAILURE: Hashes match but files don't!");
            println!("\tHash of both \"{name_a}\" and \"{name_b}\":\n\t{text_a}");
        }
        Outcome::Different => {
            println!("Files \"{name_a}\" and \"{name_b}\" are different:");
            println!("\tHash of \"{name_a}\":\n\t {text_a}");
            println!("\tHash of \"{name_b}\":\n\t {text_b}");
        }
    }

    if outcome.is_failure() {
        anyhow::bail!("hash failure comparing {name_a} and {name_b}");
    }
    Ok(())
}
