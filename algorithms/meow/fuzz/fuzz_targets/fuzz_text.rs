#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(bytes) = meow::parse_hash_text(s) {
            let printed = meow::hash_text(&bytes).to_string();
            assert_eq!(meow::parse_hash_text(&printed), Ok(bytes));
        }
    }
});
