//! Seed Builder
//!
//! Computes the Shift-And state aligned to text position `m - 1` without
//! probing the text character by character for every prefix length.
//!
//! The Z engine runs `pattern` (as prefix) against the first window
//! `text[..m]`. Window position `k` whose match length reaches the window
//! end (`m - k`) means the pattern prefix of that length ends at `m - 1`,
//! so bit `m - k - 1` is cleared.

use crate::alphabet::Symbol;
use crate::delta::{full_mask, Mask, MAX_PATTERN_LEN};
use crate::zalgo::prefix_match_lengths_into;

/// Initial bit-vector for `pattern` over `text`.
///
/// - `pattern_z` must be the Z-array of `pattern`
/// - `text.len() < pattern.len()`: all `m` bits set (no prefix confirmed)
///
/// Works on stack buffers; no heap allocation.
pub fn seed_vector(pattern: &[Symbol], text: &[u8], pattern_z: &[usize]) -> Mask {
    let m = pattern.len();
    let mut vector = full_mask(m);

    if m == 0 || text.len() < m {
        return vector;
    }
    debug_assert!(m <= MAX_PATTERN_LEN);

    let mut window = [Symbol::UNMAPPED; MAX_PATTERN_LEN];
    for (w, &b) in window.iter_mut().zip(&text[..m]) {
        *w = Symbol::new(b);
    }

    let mut lengths = [0usize; MAX_PATTERN_LEN];
    prefix_match_lengths_into(pattern, &window[..m], pattern_z, &mut lengths[..m]);

    for (k, &len) in lengths[..m].iter().enumerate() {
        if len == m - k {
            let bit: Mask = 1 << (m - k - 1);
            vector &= !bit;
        }
    }

    tracing::trace!(m, vector = ?vector, "seeded shift-and state");
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zalgo::z_array;

    fn symbols(s: &[u8]) -> Vec<Symbol> {
        s.iter().map(|&b| Symbol::new(b)).collect()
    }

    fn seed(pattern: &[u8], text: &[u8]) -> Mask {
        let p = symbols(pattern);
        let z = z_array(&p);
        seed_vector(&p, text, &z)
    }

    /// Bit `j` is 0 iff `pattern[..=j]` ends at `m - 1`.
    fn naive_seed(pattern: &[u8], text: &[u8]) -> Mask {
        let m = pattern.len();
        let mut v = full_mask(m);
        if text.len() < m {
            return v;
        }
        for j in 0..m {
            if text[m - 1 - j..m] == pattern[..=j] {
                v &= !((1 as Mask) << j);
            }
        }
        v
    }

    #[test]
    fn test_seed_exact_window() {
        // Only the full pattern ends at position 2
        assert_eq!(seed(b"abc", b"abcabc"), 0b011);
    }

    #[test]
    fn test_seed_partial_prefix() {
        // "ab" ends at position 2 in "xab"
        assert_eq!(seed(b"abc", b"xab"), 0b101);
    }

    #[test]
    fn test_seed_overlap() {
        // Every prefix of "aaa" ends at position 2
        assert_eq!(seed(b"aaa", b"aaaa"), 0b000);
        assert_eq!(seed(b"aaa", b"baa"), 0b100);
    }

    #[test]
    fn test_seed_short_text() {
        assert_eq!(seed(b"abcd", b"ab"), 0b1111);
        assert_eq!(seed(b"abcd", b""), 0b1111);
    }

    #[test]
    fn test_seed_out_of_alphabet() {
        assert_eq!(seed(b"a\t", b"a\t"), 0b11);
        assert_eq!(seed(b"ab", b"\tb"), 0b11);
    }

    #[test]
    fn test_seed_matches_naive() {
        let cases: [(&[u8], &[u8]); 6] = [
            (b"abab", b"ababab"),
            (b"abab", b"babab"),
            (b"aab", b"aaab"),
            (b"abcab", b"cabca"),
            (b" ~ ", b"~ ~ ~"),
            (b"x", b"x"),
        ];
        for (pattern, text) in cases {
            assert_eq!(seed(pattern, text), naive_seed(pattern, text), "pattern {:?}", pattern);
        }
    }
}
