//! Error types

use thiserror::Error;

/// Matcher construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// Pattern does not fit in the bit-vector word.
    #[error("pattern too long: {len} symbols, bit-vector holds at most {max}")]
    PatternTooLong { len: usize, max: usize },
}
