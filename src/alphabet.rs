//! Alphabet
//!
//! Printable ASCII, `' '..='~'` (95 symbols), plus one reserved slot for
//! everything else. Tables are indexed by `byte - ALPHABET_START`.

/// First symbol of the alphabet (space)
pub const ALPHABET_START: u8 = b' ';
/// Last symbol of the alphabet (tilde)
pub const ALPHABET_END: u8 = b'~';
/// Number of real symbols
pub const ALPHABET_SIZE: usize = (ALPHABET_END - ALPHABET_START) as usize + 1;
/// Slot for bytes outside the alphabet
pub const RESERVED_SLOT: usize = ALPHABET_SIZE;
/// Table size including the reserved slot
pub const TABLE_SIZE: usize = ALPHABET_SIZE + 1;

/// Map a byte to its table slot.
#[inline(always)]
pub fn slot(byte: u8) -> usize {
    if (ALPHABET_START..=ALPHABET_END).contains(&byte) {
        (byte - ALPHABET_START) as usize
    } else {
        RESERVED_SLOT
    }
}

/// Is `byte` inside the alphabet?
#[inline(always)]
pub fn is_symbol(byte: u8) -> bool {
    slot(byte) != RESERVED_SLOT
}

/// A byte compared the way the matcher sees it.
///
/// Two symbols are equal when they share a slot and that slot is not the
/// reserved one. An out-of-alphabet byte equals nothing, itself included,
/// so it can never satisfy a pattern position. The relation stays symmetric
/// and transitive, which is all the Z-algorithm needs to reuse its window.
#[derive(Clone, Copy, Debug)]
pub struct Symbol(u8);

impl Symbol {
    /// Placeholder for unused buffer cells.
    pub const UNMAPPED: Symbol = Symbol(0);

    #[inline(always)]
    pub fn new(byte: u8) -> Self {
        Symbol(byte)
    }

    #[inline(always)]
    pub fn byte(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn slot(self) -> usize {
        slot(self.0)
    }
}

impl PartialEq for Symbol {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && is_symbol(self.0)
    }
}

impl From<u8> for Symbol {
    #[inline(always)]
    fn from(byte: u8) -> Self {
        Symbol(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size() {
        assert_eq!(ALPHABET_SIZE, 95);
        assert_eq!(RESERVED_SLOT, 95);
        assert_eq!(TABLE_SIZE, 96);
    }

    #[test]
    fn test_slot_edges() {
        assert_eq!(slot(b' '), 0);
        assert_eq!(slot(b'~'), 94);
        assert_eq!(slot(b'a'), (b'a' - b' ') as usize);

        // Just outside on both ends
        assert_eq!(slot(0x1F), RESERVED_SLOT);
        assert_eq!(slot(0x7F), RESERVED_SLOT);
        assert_eq!(slot(b'\n'), RESERVED_SLOT);
        assert_eq!(slot(0xFF), RESERVED_SLOT);
    }

    #[test]
    fn test_symbol_equality() {
        assert_eq!(Symbol::new(b'a'), Symbol::new(b'a'));
        assert_ne!(Symbol::new(b'a'), Symbol::new(b'b'));
        assert_eq!(Symbol::new(b' '), Symbol::new(b' '));
        assert_eq!(Symbol::new(b'~'), Symbol::new(b'~'));

        // Out-of-alphabet never matches, not even itself
        assert_ne!(Symbol::new(b'\t'), Symbol::new(b'\t'));
        assert_ne!(Symbol::new(0x80), Symbol::new(b'a'));
    }
}
