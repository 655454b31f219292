//! Atbash cipher: the alphabet read backwards.
//!
//! The mapping is an involution, so encryption and decryption are the same
//! operation.

use tracing::{debug, trace};

use crate::alphabet::SubstitutionTable;
use crate::cipher::Cipher;

/// Alphabet-reversal cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atbash {
    table: SubstitutionTable,
}

impl Atbash {
    pub fn new() -> Self {
        debug!("atbash cipher constructed");
        Self {
            table: SubstitutionTable::reversed(),
        }
    }

    /// The underlying substitution table.
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }
}

impl Default for Atbash {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for Atbash {
    fn name(&self) -> &'static str {
        "Atbash"
    }

    fn encrypt(&self, text: &str) -> String {
        trace!(len = text.len(), "atbash encrypt");
        self.table.encrypt(text)
    }

    fn decrypt(&self, text: &str) -> String {
        trace!(len = text.len(), "atbash decrypt");
        self.table.decrypt(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        let cipher = Atbash::new();
        assert_eq!(cipher.encrypt("HELLO"), "SVOOL");
        assert_eq!(cipher.decrypt("SVOOL"), "HELLO");
    }

    #[test]
    fn test_encrypt_equals_decrypt() {
        let cipher = Atbash::new();
        let text = "Wizard of Oz, 1939";
        assert_eq!(cipher.encrypt(text), cipher.decrypt(text));
        assert_eq!(cipher.encrypt(text), "DRAZIW LU LA, 1939");
    }

    #[test]
    fn test_involution() {
        let cipher = Atbash::default();
        assert!(cipher.table().is_involution());
        assert_eq!(cipher.encrypt(&cipher.encrypt("ABCXYZ")), "ABCXYZ");
    }
}
