//! Shift-And Pattern Matching Example
//!
//! Demonstrates one-shot matching and a reusable matcher.
//!
//! ```bash
//! cargo run --example find_offsets
//! ```

use alice_bitpm::{find_all, ShiftAnd, MAX_PATTERN_LEN};

fn main() {
    println!("=== ALICE-BitPM Shift-And Demo ===\n");

    let text = b"the quick brown fox jumps over the lazy dog. \
                 the fox was quick and the dog was lazy. \
                 a quick brown dog outfoxed a lazy fox.";

    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", String::from_utf8_lossy(text));

    println!("\n--- Search Results ---\n");

    let queries = ["fox", "the", "quick", "lazy", "cat", "brown fox"];

    for query in &queries {
        match find_all(text, query.as_bytes()) {
            Ok(offsets) if !offsets.is_empty() => {
                println!("  \"{}\" -> {} occurrences at offsets {:?}", query, offsets.len(), offsets)
            }
            Ok(_) => println!("  \"{}\" -> not found", query),
            Err(e) => println!("  \"{}\" -> {}", query, e),
        }
    }

    // Overlapping matches
    println!("\n--- Overlap ---\n");
    println!("  find_all(\"aaaa\", \"aa\") = {:?}", find_all(b"aaaa", b"aa").unwrap_or_default());

    // Reusable matcher, lazy iterator
    println!("\n--- Zero-Allocation Iterator ---\n");
    let matcher = match ShiftAnd::new(b"the") {
        Ok(m) => m,
        Err(e) => {
            println!("  {}", e);
            return;
        }
    };
    print!("  Offsets of \"the\": ");
    for pos in matcher.find_iter(text) {
        print!("{} ", pos);
    }
    println!();

    // Length cap
    println!("\n--- Pattern Length Cap ({} symbols) ---\n", MAX_PATTERN_LEN);
    let long = vec![b'x'; MAX_PATTERN_LEN + 1];
    if let Err(e) = find_all(text, &long) {
        println!("  {}", e);
    }
}
