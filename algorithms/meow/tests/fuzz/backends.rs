use bolero::check;
use meow::{kernels, DEFAULT_SEED};

#[test]
fn fuzz_dispatched_matches_portable() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let portable = kernels::portable::oneshot(&DEFAULT_SEED, data);
        assert_eq!(meow::hash(data), portable, "Backend mismatch, len {}", data.len());
    });
}

#[test]
fn fuzz_seeded_backends_agree() {
    check!()
        .with_type::<(u8, Vec<u8>)>()
        .for_each(|(seed_byte, data)| {
            let seed: [u8; 128] = core::array::from_fn(|i| seed_byte.wrapping_add(i as u8));
            let portable = kernels::portable::oneshot(&seed, data);
            assert_eq!(meow::hash_seeded(&seed, data), portable);
        });
}
