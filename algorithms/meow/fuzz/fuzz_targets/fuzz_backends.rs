#![no_main]

use libfuzzer_sys::fuzz_target;
use meow::kernels;

fuzz_target!(|data: &[u8]| {
    // First 128 bytes (when present) act as the seed, the rest as input.
    let (seed, input) = if data.len() >= meow::SEED_SIZE {
        let (s, rest) = data.split_at(meow::SEED_SIZE);
        let mut seed = [0u8; meow::SEED_SIZE];
        seed.copy_from_slice(s);
        (seed, rest)
    } else {
        (meow::DEFAULT_SEED, data)
    };

    let dispatched = meow::hash_seeded(&seed, input);
    let portable = kernels::portable::oneshot(&seed, input);
    assert_eq!(dispatched, portable, "Backend mismatch at len {}", input.len());
});
