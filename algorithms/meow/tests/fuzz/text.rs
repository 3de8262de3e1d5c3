use bolero::check;
use meow::{hash_text, parse_hash_text};

#[test]
fn fuzz_text_round_trip() {
    check!().with_type::<[u8; 16]>().for_each(|bytes| {
        let text = hash_text(bytes).to_string();
        assert_eq!(parse_hash_text(&text), Ok(*bytes), "Round trip failed: {text}");
    });
}

#[test]
fn fuzz_parse_never_panics() {
    check!().with_type::<String>().for_each(|s| {
        if let Ok(bytes) = parse_hash_text(s) {
            // Whatever parses must print back to the same value.
            let again = parse_hash_text(&hash_text(&bytes).to_string());
            assert_eq!(again, Ok(bytes));
        }
    });
}
