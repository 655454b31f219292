//! Caesar cipher: a uniform shift of the alphabet.

use tracing::{debug, trace};

use crate::alphabet::SubstitutionTable;
use crate::cipher::Cipher;

/// Canonical shift.
pub const DEFAULT_SHIFT: i64 = 3;

/// Shift cipher. Equivalent to an affine cipher with `alpha = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
    table: SubstitutionTable,
}

impl Caesar {
    /// Build a Caesar cipher shifting by `shift` positions.
    ///
    /// Any integer is accepted and reduced modulo 26; a shift of 0 (or any
    /// multiple of 26) is the identity.
    pub fn new(shift: i64) -> Self {
        debug!(shift, "caesar cipher constructed");
        Self {
            shift,
            table: SubstitutionTable::shifted(shift),
        }
    }

    /// The shift as given at construction.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// The underlying substitution table.
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }
}

impl Default for Caesar {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT)
    }
}

impl Cipher for Caesar {
    fn name(&self) -> &'static str {
        "Caesar"
    }

    fn encrypt(&self, text: &str) -> String {
        trace!(len = text.len(), shift = self.shift, "caesar encrypt");
        self.table.encrypt(text)
    }

    fn decrypt(&self, text: &str) -> String {
        trace!(len = text.len(), shift = self.shift, "caesar decrypt");
        self.table.decrypt(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        let cipher = Caesar::default();
        assert_eq!(cipher.shift(), 3);
        assert_eq!(cipher.encrypt("HELLO"), "KHOOR");
        assert_eq!(cipher.decrypt("KHOOR"), "HELLO");
    }

    #[test]
    fn test_wraps_around() {
        let cipher = Caesar::new(3);
        assert_eq!(cipher.encrypt("xyz"), "ABC");
        assert_eq!(cipher.decrypt("abc"), "XYZ");
    }

    #[test]
    fn test_rot13_is_involution() {
        let cipher = Caesar::new(13);
        assert!(cipher.table().is_involution());
        assert_eq!(
            cipher.encrypt("Why did the chicken cross the road?"),
            "JUL QVQ GUR PUVPXRA PEBFF GUR EBNQ?"
        );
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let cipher = Caesar::new(26);
        assert_eq!(cipher.encrypt("Attack at dawn"), "ATTACK AT DAWN");
    }

    #[test]
    fn test_punctuation_positions() {
        let cipher = Caesar::default();
        assert_eq!(cipher.encrypt("a.b,c d"), "D.E,F G");
    }
}
