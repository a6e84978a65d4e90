//! Delta Table (Per-Symbol Bitmasks)
//!
//! For each alphabet slot, an `m`-bit mask where bit `i` is **0** if that
//! symbol occurs at pattern position `i`, **1** otherwise.
//!
//! Fixed size ([`TABLE_SIZE`] entries), O(1) lookup by `byte - ' '`.
//! The reserved slot holds the all-ones mask and is never modified.

use crate::alphabet::{slot, RESERVED_SLOT, TABLE_SIZE};

/// Bit-vector word. Its width is the hard cap on pattern length.
#[cfg(not(feature = "wide-mask"))]
pub type Mask = u64;
/// Bit-vector word. Its width is the hard cap on pattern length.
#[cfg(feature = "wide-mask")]
pub type Mask = u128;

/// Longest pattern the bit-vector can track
pub const MAX_PATTERN_LEN: usize = Mask::BITS as usize;

/// Low `m` bits set. `m = 0` yields 0, `m = Mask::BITS` yields `Mask::MAX`.
#[inline(always)]
pub fn full_mask(m: usize) -> Mask {
    debug_assert!(m <= MAX_PATTERN_LEN);
    Mask::MAX.checked_shr((MAX_PATTERN_LEN - m) as u32).unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeltaTable {
    masks: [Mask; TABLE_SIZE],
}

impl DeltaTable {
    /// Build the table from `pattern` in O(m).
    ///
    /// Callers must ensure `pattern.len() <= MAX_PATTERN_LEN`.
    /// Out-of-alphabet pattern bytes clear nothing: such a position can
    /// never be satisfied.
    pub fn build(pattern: &[u8]) -> Self {
        let all = full_mask(pattern.len());
        let mut masks = [all; TABLE_SIZE];

        for (i, &c) in pattern.iter().enumerate() {
            let s = slot(c);
            if s != RESERVED_SLOT {
                let bit: Mask = 1 << i;
                masks[s] &= !bit;
            }
        }

        Self { masks }
    }

    /// Mask for a text byte; falls back to the reserved slot.
    #[inline(always)]
    pub fn mask(&self, byte: u8) -> Mask {
        self.masks[slot(byte)]
    }

    /// The "never matches" mask (all `m` bits set)
    #[inline]
    pub fn fallback(&self) -> Mask {
        self.masks[RESERVED_SLOT]
    }
}
