//! Meow Basic Example
//!
//! Minimal usage: `let hash = meow::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let hash = meow::hash(data);

    println!("Data:    {:?}", String::from_utf8_lossy(data));
    println!("Hash:    {}", meow::hash_text(&hash));
    println!("Hex:     {}", hex::encode(hash));
    println!("Backend: {}", meow::active_backend());
}
