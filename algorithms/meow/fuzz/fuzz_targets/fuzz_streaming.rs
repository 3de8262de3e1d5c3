#![no_main]

use libfuzzer_sys::fuzz_target;
use meow::Hasher;

fuzz_target!(|data: &[u8]| {
    let reference_hash = meow::hash(data);

    // Chunk size is derived from the first byte (1 to 255)
    let chunk_size = data.first().map_or(1, |&b| (b as usize % 255) + 1);

    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }

    assert_eq!(
        reference_hash,
        hasher.finalize(),
        "Streaming and One-Shot approaches differ!"
    );
});
