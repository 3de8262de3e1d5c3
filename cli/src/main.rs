//! Meow CLI
//!
//! Hash files, compare two files, or verify a checksum list.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{check_mode, compare_files, hash_files, hash_test_buffer, load_seed, Format};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "meow")]
#[command(about = "Fast 128-bit hash built on AES decryption rounds", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand). Without files, hashes a 16,000-byte test buffer.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Read the 128-byte seed from this file instead of using the default seed
    #[arg(long, value_name = "FILE", global = true)]
    seed_file: Option<PathBuf>,

    /// Print the elapsed time to stderr when done
    #[arg(long, global = true)]
    timing: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Hash two files and compare both their contents and their digests
    Compare {
        #[arg(value_name = "FILE_A")]
        a: PathBuf,
        #[arg(value_name = "FILE_B")]
        b: PathBuf,
    },
}

// =============================================================================
// LOGGING
// =============================================================================

/// Log to stderr. `-v` flags win over `RUST_LOG`; the fallback is `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::info!(backend = meow::active_backend(), "meow {}", meow::VERSION_NAME);

    let seed = match &cli.seed_file {
        Some(path) => load_seed(path)?,
        None => meow::DEFAULT_SEED,
    };

    let start = Instant::now();
    let result = match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, &seed),
        Some(Commands::Compare { a, b }) => compare_files(a, b, &seed, cli.format),
        None if cli.files.is_empty() => {
            hash_test_buffer(&seed, cli.format);
            Ok(())
        }
        None => hash_files(&cli.files, &seed, cli.format),
    };

    if cli.timing {
        eprintln!("took {:?}", start.elapsed());
    }

    result
}
