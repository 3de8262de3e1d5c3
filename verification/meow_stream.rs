//! # `PractRand` Stream Generator
//!
//! Writes an endless stream of Meow digests to stdout for statistical
//! testing. Each digest covers an incrementing 64-bit counter repeated to
//! the requested input size.
//!
//! ```text
//! meow_stream 64 | RNG_test stdin
//! meow_stream cyclic | RNG_test stdin
//! ```

use std::io::{self, BufWriter, ErrorKind, Write};

use anyhow::{bail, Result};
use clap::Parser;

/// Input sizes walked by `cyclic` mode. 257 straddles a block boundary.
const CYCLIC_SIZES: [usize; 6] = [16, 32, 64, 128, 256, 257];

#[derive(Parser)]
#[command(about = "Stream Meow digests of a counter for PractRand")]
struct Args {
    /// Input size in bytes, or `cyclic` to rotate through several sizes
    #[arg(default_value = "64")]
    mode: String,
}

#[derive(Clone, Copy)]
enum Mode {
    Fixed(usize),
    Cyclic,
}

impl Mode {
    fn parse(s: &str) -> Result<Self> {
        if s == "cyclic" {
            return Ok(Self::Cyclic);
        }
        match s.parse::<usize>() {
            Ok(size) => Ok(Self::Fixed(size)),
            Err(_) => bail!("invalid mode '{s}': expected a byte count or 'cyclic'"),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn size_for(self, counter: u64) -> usize {
        match self {
            Self::Fixed(size) => size,
            Self::Cyclic => CYCLIC_SIZES[(counter % CYCLIC_SIZES.len() as u64) as usize],
        }
    }
}

/// Fill `input` with the little-endian counter, repeated.
fn fill_counter(input: &mut [u8], counter: u64) {
    let counter_bytes = counter.to_le_bytes();
    for (i, item) in input.iter_mut().enumerate() {
        *item = counter_bytes[i % 8];
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mode = Mode::parse(&args.mode)?;

    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());
    let mut input = Vec::new();
    let mut counter: u64 = 0;

    loop {
        input.resize(mode.size_for(counter), 0);
        fill_counter(&mut input, counter);

        let hash = meow::hash(&input);
        match handle.write_all(&hash) {
            Ok(()) => {}
            // Reader hung up.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        counter = counter.wrapping_add(1);
    }
}
