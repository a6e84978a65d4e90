//! # ALICE-BitPM
//!
//! **Shift-And exact pattern matching, seeded by the Z-algorithm**
//!
//! > "One word of state per text symbol. No backtracking, no surprises."
//!
//! ## Architecture
//!
//! - **Z-Engine**: one window-driven engine for both self- and cross-comparison
//! - **Seed Builder**: first-window state from the pattern's Z-array (no per-prefix probing)
//! - **Delta Table**: fixed 96-slot mask table, O(1) lookup by `byte - ' '`
//! - **Scanner**: shift-or-truncate recurrence, zero-allocation iterator
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build | **O(M)** | O(M) + 96 words |
//! | Seed | O(M) | **O(1)** heap |
//! | Scan | **O(N)** | O(1) (iterator) |
//!
//! Patterns may be up to [`MAX_PATTERN_LEN`] symbols (64, or 128 with the
//! `wide-mask` feature). The alphabet is printable ASCII (`' '..='~'`); any
//! other byte never satisfies a pattern position.
//!
//! ## Example
//!
//! ```
//! use alice_bitpm::{find_all, ShiftAnd};
//!
//! // One-shot
//! assert_eq!(find_all(b"abcabcabc", b"abc").unwrap(), vec![0, 3, 6]);
//! assert_eq!(find_all(b"aaaa", b"aa").unwrap(), vec![0, 1, 2]);
//!
//! // Reusable matcher (zero-allocation iterator)
//! let matcher = ShiftAnd::new(b"fox").unwrap();
//! let offsets: Vec<_> = matcher.find_iter(b"fox and fox").collect();
//! assert_eq!(offsets, vec![0, 8]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
use alloc::vec::Vec;

pub mod alphabet;
pub mod delta;
pub mod error;
pub mod scanner;
pub mod seed;
pub mod zalgo;

#[cfg(feature = "std")]
pub mod io;

pub use delta::{DeltaTable, Mask, MAX_PATTERN_LEN};
pub use error::MatchError;
pub use scanner::{MatchIter, ShiftAnd};

/// Version
pub const VERSION: &str = "0.1.0";

/// Every start offset of `pattern` in `text`, ascending.
///
/// - Empty pattern: no matches
/// - Pattern longer than text: no matches
///
/// # Errors
/// - [`MatchError::PatternTooLong`] if `pattern.len() > MAX_PATTERN_LEN`
pub fn find_all(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>, MatchError> {
    Ok(ShiftAnd::new(pattern)?.find_all(text))
}
