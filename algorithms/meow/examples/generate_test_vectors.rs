//! Generator for Meow test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Symbolic inputs: `SEQ_n` is `n` bytes of `i mod 256`, `ZEROS_n` is `n` zero
//! bytes. Seed tag `ALT` is the 128-byte seed `byte[i] = (7i + 3) mod 256`.
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]
use serde_json::json;

fn sequence(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 256) as u8).collect()
}

fn main() {
    let mut vectors = Vec::new();
    let alt_seed: [u8; meow::SEED_SIZE] = core::array::from_fn(|i| ((i * 7 + 3) % 256) as u8);

    // =========================================================================
    // 1. LENGTH BOUNDARIES
    // =========================================================================

    // Residual-only, residual + lanes, exact blocks and multi-block inputs.
    for n in [
        0, 1, 15, 16, 17, 31, 32, 33, 63, 64, 255, 256, 257, 300, 8191, 8192, 8193, 16000,
    ] {
        vectors.push(json!({
            "name": format!("seq_{n}"),
            "input": format!("SEQ_{n}"),
            "seed": "default",
            "hash": hex::encode(meow::hash(&sequence(n)))
        }));
    }

    // =========================================================================
    // 2. ASCII INPUTS
    // =========================================================================

    for s in ["", "abc", "Meow Hash", "The quick brown fox jumps over the lazy dog"] {
        vectors.push(json!({
            "name": format!("ascii_{}", s.len()),
            "input": s,
            "seed": "default",
            "hash": hex::encode(meow::hash(s.as_bytes()))
        }));
    }

    // =========================================================================
    // 3. ALTERNATE SEED
    // =========================================================================

    for n in [0, 31, 256, 1000] {
        vectors.push(json!({
            "name": format!("alt_seed_seq_{n}"),
            "input": format!("SEQ_{n}"),
            "seed": "ALT",
            "hash": hex::encode(meow::hash_seeded(&alt_seed, &sequence(n)))
        }));
    }

    // =========================================================================
    // 4. UNIFORM BUFFERS
    // =========================================================================

    vectors.push(json!({
        "name": "zeros_4096",
        "input": "ZEROS_4096",
        "seed": "default",
        "hash": hex::encode(meow::hash(&[0u8; 4096]))
    }));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
