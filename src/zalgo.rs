//! Z-Algorithm (Linear Prefix Matching)
//!
//! `Z[k]` = length of the longest common prefix of `s` and `s[k..]`.
//!
//! **One engine, two uses**:
//! - Self-comparison: the classic Z-array of a single sequence
//! - Cross-comparison: prefix of `pattern` against every suffix of a `target`,
//!   borrowing the pattern's own Z-array for the in-window shortcut
//!
//! Both run in O(len) even on adversarial input (`aaaa...`): the window end
//! `right` never moves backwards, and every explicit comparison either
//! advances it or stops at the first mismatch.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Where case-2 lookups read previous Z-values from.
#[derive(Clone, Copy)]
enum Mirror<'z> {
    /// The array being filled (self-comparison)
    Own,
    /// The prefix sequence's precomputed Z-array (cross-comparison)
    Prefix(&'z [usize]),
}

/// Count matching symbols of `prefix[j..]` against `target[i..]`.
#[inline(always)]
fn extend<T: PartialEq>(prefix: &[T], target: &[T], mut i: usize, mut j: usize) -> usize {
    let mut matched = 0;
    while i < target.len() && j < prefix.len() && prefix[j] == target[i] {
        matched += 1;
        i += 1;
        j += 1;
    }
    matched
}

/// Window-driven Z scan over `target[first..]`, writing into `z`.
///
/// Invariant: `target[left..right) == prefix[..right - left)`.
fn z_scan<T: PartialEq>(
    prefix: &[T],
    target: &[T],
    first: usize,
    mirror: Mirror<'_>,
    z: &mut [usize],
) {
    debug_assert!(z.len() >= target.len());

    let mut left = 0;
    let mut right = 0;

    for k in first..target.len() {
        if k >= right {
            // Case 1: outside the window, compare from scratch
            let len = extend(prefix, target, k, 0);
            z[k] = len;
            if len > 0 {
                left = k;
                right = k + len;
            }
            continue;
        }

        // Case 2: inside the window, reuse the mirrored value
        let prev = match mirror {
            Mirror::Own => z[k - left],
            Mirror::Prefix(zp) => zp[k - left],
        };
        let remaining = right - k;

        if prev < remaining {
            z[k] = prev;
        } else if prev > remaining {
            z[k] = remaining;
        } else {
            let ext = extend(prefix, target, right, right - k);
            z[k] = remaining + ext;
            left = k;
            right += ext;
        }
    }
}

/// Compute the Z-array of `seq`.
///
/// `Z[0] = seq.len()`. Empty input yields an empty array.
///
/// # Example
/// ```
/// use alice_bitpm::zalgo::z_array;
///
/// assert_eq!(z_array(b"aabxaab"), vec![7, 1, 0, 0, 3, 1, 0]);
/// ```
pub fn z_array<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    let n = seq.len();
    if n == 0 {
        return Vec::new();
    }

    let mut z = vec![0usize; n];
    z_array_into(seq, &mut z);
    z
}

/// Z-array into a caller buffer (`out.len() >= seq.len()`).
pub(crate) fn z_array_into<T: PartialEq>(seq: &[T], out: &mut [usize]) {
    if seq.is_empty() {
        return;
    }
    out[0] = seq.len();
    z_scan(seq, seq, 1, Mirror::Own, out);
}

/// For each `k` in `0..target.len()`, the length of the longest common
/// prefix of `prefix` and `target[k..]`.
///
/// `prefix_z` must be `z_array(prefix)`; it replaces explicit comparisons
/// whenever `k` falls inside an already-matched window of `target`.
///
/// # Example
/// ```
/// use alice_bitpm::zalgo::{prefix_match_lengths, z_array};
///
/// let pattern = b"abab";
/// let z = z_array(pattern);
/// assert_eq!(prefix_match_lengths(pattern, b"xaba", &z), vec![0, 3, 0, 1]);
/// ```
pub fn prefix_match_lengths<T: PartialEq>(prefix: &[T], target: &[T], prefix_z: &[usize]) -> Vec<usize> {
    let mut out = vec![0usize; target.len()];
    prefix_match_lengths_into(prefix, target, prefix_z, &mut out);
    out
}

/// [`prefix_match_lengths`] into a caller buffer (`out.len() >= target.len()`).
pub(crate) fn prefix_match_lengths_into<T: PartialEq>(
    prefix: &[T],
    target: &[T],
    prefix_z: &[usize],
    out: &mut [usize],
) {
    debug_assert_eq!(prefix_z.len(), prefix.len());
    z_scan(prefix, target, 0, Mirror::Prefix(prefix_z), out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Symbol;
    use proptest::prelude::*;

    fn naive_z(s: &[u8]) -> Vec<usize> {
        (0..s.len())
            .map(|k| s[k..].iter().zip(s).take_while(|(a, b)| a == b).count())
            .collect()
    }

    fn naive_lcp(prefix: &[u8], target: &[u8]) -> Vec<usize> {
        (0..target.len())
            .map(|k| target[k..].iter().zip(prefix).take_while(|(a, b)| a == b).count())
            .collect()
    }

    #[test]
    fn test_z_empty() {
        assert!(z_array::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_z_single() {
        assert_eq!(z_array(b"a"), vec![1]);
    }

    #[test]
    fn test_z_classic() {
        assert_eq!(z_array(b"aabcaabxaaaz"), vec![12, 1, 0, 0, 3, 1, 0, 0, 2, 2, 1, 0]);
        assert_eq!(z_array(b"abcabcabc"), vec![9, 0, 0, 6, 0, 0, 3, 0, 0]);
    }

    #[test]
    fn test_z_all_same() {
        // Adversarial input: every position hits case 2
        let s = [b'a'; 64];
        let z = z_array(&s);
        for (k, &v) in z.iter().enumerate() {
            assert_eq!(v, 64 - k, "Mismatch at position {}", k);
        }
    }

    #[test]
    fn test_z_case_2c_extension() {
        // Z[4] mirrors Z[1] exactly at the window edge, then extends
        let s = b"aaabaaaab";
        assert_eq!(z_array(s), naive_z(s));
    }

    #[test]
    fn test_prefix_match_lengths_full_window() {
        let pattern = b"abc";
        let z = z_array(pattern);
        assert_eq!(prefix_match_lengths(pattern, b"abc", &z), vec![3, 0, 0]);
    }

    #[test]
    fn test_prefix_match_lengths_overlap() {
        let pattern = b"aaaa";
        let z = z_array(pattern);
        assert_eq!(prefix_match_lengths(pattern, b"aaaa", &z), vec![4, 3, 2, 1]);
        assert_eq!(prefix_match_lengths(pattern, b"baaa", &z), vec![0, 3, 2, 1]);
    }

    #[test]
    fn test_symbol_sequences() {
        // Out-of-alphabet symbols never extend a match
        let s: Vec<Symbol> = b"a\ta\t".iter().map(|&b| Symbol::new(b)).collect();
        assert_eq!(z_array(&s), vec![4, 0, 1, 0]);
    }

    proptest! {
        #[test]
        fn z_matches_naive(s in prop::collection::vec(b'a'..=b'c', 0..64)) {
            prop_assert_eq!(z_array(&s), naive_z(&s));
        }

        #[test]
        fn prefix_lengths_match_naive(
            prefix in prop::collection::vec(b'a'..=b'b', 1..24),
            target in prop::collection::vec(b'a'..=b'b', 0..24),
        ) {
            let z = z_array(&prefix);
            prop_assert_eq!(prefix_match_lengths(&prefix, &target, &z), naive_lcp(&prefix, &target));
        }
    }
}
