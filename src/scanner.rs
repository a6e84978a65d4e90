//! Shift-And Scanner
//!
//! **Architecture**:
//! - Delta Table: per-symbol masks, built once per pattern
//! - Z-array of the pattern: built once, reused by every seed
//! - Scan: iterator-based (zero allocation for query results)
//!
//! **Core Recurrence**:
//! - `state(i + 1) = ((state(i) << 1) | delta[text[i + 1]]) & (2^m - 1)`
//! - Bit `m - 1` of `state(i)` is 0 iff the pattern ends at text position `i`
//! - Complexity: O(m) build, O(m + n) per text

extern crate alloc;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::alphabet::Symbol;
use crate::delta::{full_mask, DeltaTable, Mask, MAX_PATTERN_LEN};
use crate::error::MatchError;
use crate::seed::seed_vector;
use crate::zalgo::z_array;

/// Exact matcher for a single pattern.
///
/// Immutable after construction; run it against as many texts as needed.
#[derive(Clone, Debug)]
pub struct ShiftAnd {
    /// Pattern, compared under alphabet equality
    pattern: Box<[Symbol]>,
    /// Z-array of the pattern
    z: Box<[usize]>,
    /// Per-symbol masks
    delta: DeltaTable,
    /// Low `m` bits set
    full: Mask,
}

impl ShiftAnd {
    /// Build a matcher for `pattern`
    ///
    /// # Errors
    /// - [`MatchError::PatternTooLong`] if `pattern.len() > MAX_PATTERN_LEN`
    ///
    /// An empty pattern is accepted and never matches.
    pub fn new(pattern: &[u8]) -> Result<Self, MatchError> {
        let m = pattern.len();
        if m > MAX_PATTERN_LEN {
            tracing::debug!(len = m, max = MAX_PATTERN_LEN, "rejecting pattern");
            return Err(MatchError::PatternTooLong {
                len: m,
                max: MAX_PATTERN_LEN,
            });
        }

        let symbols: Box<[Symbol]> = pattern.iter().map(|&b| Symbol::new(b)).collect();
        let z = z_array(&symbols[..]).into_boxed_slice();
        let delta = DeltaTable::build(pattern);

        tracing::debug!(pattern_len = m, "built shift-and matcher");

        Ok(ShiftAnd {
            pattern: symbols,
            z,
            delta,
            full: full_mask(m),
        })
    }

    /// Iterate match start offsets in ascending order
    ///
    /// **Zero Allocation**: the seed lives on the stack, results are lazy.
    ///
    /// # Example
    /// ```
    /// use alice_bitpm::ShiftAnd;
    ///
    /// let matcher = ShiftAnd::new(b"abc").unwrap();
    /// let offsets: Vec<_> = matcher.find_iter(b"abcabcabc").collect();
    /// assert_eq!(offsets, vec![0, 3, 6]);
    /// ```
    #[inline]
    pub fn find_iter<'a>(&'a self, text: &'a [u8]) -> MatchIter<'a> {
        let m = self.pattern.len();

        // Empty pattern or short text: empty loop range
        if m == 0 || text.len() < m {
            return MatchIter {
                matcher: self,
                text,
                state: self.full,
                pos: text.len(),
            };
        }

        MatchIter {
            matcher: self,
            text,
            state: seed_vector(&self.pattern, text, &self.z),
            pos: m - 1,
        }
    }

    /// All match start offsets, ascending
    ///
    /// Use `find_iter()` to avoid the allocation.
    pub fn find_all(&self, text: &[u8]) -> Vec<usize> {
        self.find_iter(text).collect()
    }

    /// Number of (possibly overlapping) occurrences
    pub fn count(&self, text: &[u8]) -> usize {
        self.find_iter(text).count()
    }

    /// Does the pattern occur anywhere in `text`?
    #[inline]
    pub fn contains(&self, text: &[u8]) -> bool {
        self.find_iter(text).next().is_some()
    }

    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// The pattern's Delta Table
    #[inline]
    pub fn delta(&self) -> &DeltaTable {
        &self.delta
    }

    /// The pattern's Z-array
    #[inline]
    pub fn z_array(&self) -> &[usize] {
        &self.z
    }
}

/// Iterator over match start offsets.
/// **Zero Allocation** - state is a single word.
pub struct MatchIter<'a> {
    matcher: &'a ShiftAnd,
    text: &'a [u8],
    /// Shift-And state aligned to `pos`
    state: Mask,
    /// Text position the state ends at
    pos: usize,
}

impl<'a> Iterator for MatchIter<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matcher.pattern.len();
        let top: Mask = 1 << (m.max(1) - 1);

        while self.pos < self.text.len() {
            let i = self.pos;
            let hit = self.state & top == 0;

            if i + 1 < self.text.len() {
                let mask = self.matcher.delta.mask(self.text[i + 1]);
                self.state = ((self.state << 1) | mask) & self.matcher.full;
            }
            self.pos += 1;

            if hit {
                return Some(i + 1 - m);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len().saturating_sub(self.pos)))
    }
}

impl<'a> core::iter::FusedIterator for MatchIter<'a> {}
