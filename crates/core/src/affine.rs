//! Affine cipher: `E(i) = (alpha * i + beta) mod 26`.
//!
//! The multiplier must be coprime with 26, otherwise two letters collide and
//! the ciphertext cannot be decrypted. This is checked at construction.

use tracing::{debug, trace, warn};

use crate::alphabet::{SubstitutionTable, ALPHABET_LEN};
use crate::cipher::Cipher;
use crate::error::{KeyError, Result};

/// Default multiplier.
pub const DEFAULT_ALPHA: i64 = 5;

/// Default offset.
pub const DEFAULT_BETA: i64 = 8;

/// Affine substitution cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affine {
    alpha: i64,
    beta: i64,
    table: SubstitutionTable,
}

impl Affine {
    /// Build an affine cipher from its key pair.
    ///
    /// Both parameters are reduced modulo 26, so negative values are allowed.
    ///
    /// # Errors
    /// Returns `KeyError::InvalidAffineKey` if `gcd(alpha, 26) != 1`.
    pub fn new(alpha: i64, beta: i64) -> Result<Self> {
        let m = ALPHABET_LEN as i64;
        let a = alpha.rem_euclid(m);
        let b = beta.rem_euclid(m);

        if gcd(a, m) != 1 {
            warn!(alpha, "rejecting affine key: multiplier not coprime with 26");
            return Err(KeyError::InvalidAffineKey { alpha }.into());
        }

        let (a, b) = (a as usize, b as usize);
        let table = SubstitutionTable::from_fn(|i| a * i + b)?;
        debug!(
            alpha,
            beta,
            cipher_alphabet = %table.cipher_alphabet(),
            "affine cipher constructed"
        );

        Ok(Self { alpha, beta, table })
    }

    /// Build the cipher with the default key (5, 8).
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_ALPHA, DEFAULT_BETA)
    }

    /// The multiplier as given at construction.
    pub fn alpha(&self) -> i64 {
        self.alpha
    }

    /// The offset as given at construction.
    pub fn beta(&self) -> i64 {
        self.beta
    }

    /// The underlying substitution table.
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }
}

impl Cipher for Affine {
    fn name(&self) -> &'static str {
        "Affine"
    }

    fn encrypt(&self, text: &str) -> String {
        trace!(len = text.len(), "affine encrypt");
        self.table.encrypt(text)
    }

    fn decrypt(&self, text: &str) -> String {
        trace!(len = text.len(), "affine decrypt");
        self.table.decrypt(text)
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(5, 26), 1);
        assert_eq!(gcd(13, 26), 13);
        assert_eq!(gcd(0, 26), 26);
        assert_eq!(gcd(26, 0), 26);
    }

    #[test]
    fn test_default_key() {
        let cipher = Affine::with_defaults().unwrap();
        assert_eq!(cipher.alpha(), 5);
        assert_eq!(cipher.beta(), 8);
        assert_eq!(cipher.encrypt("HELLO"), "RCLLA");
        assert_eq!(cipher.decrypt("RCLLA"), "HELLO");
    }

    #[test]
    fn test_cipher_alphabet() {
        let cipher = Affine::with_defaults().unwrap();
        assert_eq!(cipher.table().cipher_alphabet(), "INSXCHMRWBGLQVAFKPUZEJOTYD");
    }

    #[test]
    fn test_lowercase_and_punctuation() {
        let cipher = Affine::with_defaults().unwrap();
        assert_eq!(cipher.encrypt("hello, world!"), "RCLLA, OAPLX!");
        assert_eq!(cipher.decrypt("rclla, oaplx!"), "HELLO, WORLD!");
    }

    #[test]
    fn test_rejects_even_and_thirteen() {
        for alpha in [0, 2, 4, 6, 8, 10, 12, 13, 14, 26, 39, 52] {
            let err = Affine::new(alpha, 8).unwrap_err();
            assert_eq!(err, Error::Key(KeyError::InvalidAffineKey { alpha }));
        }
    }

    #[test]
    fn test_accepts_all_units() {
        for alpha in [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25, -1, 27] {
            assert!(Affine::new(alpha, 0).is_ok(), "alpha {} should be valid", alpha);
        }
    }

    #[test]
    fn test_alpha_one_is_caesar() {
        let affine = Affine::new(1, 3).unwrap();
        assert_eq!(affine.table(), &SubstitutionTable::shifted(3));
    }

    #[test]
    fn test_negative_beta() {
        let a = Affine::new(5, -18).unwrap();
        let b = Affine::new(5, 8).unwrap();
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn test_empty_input() {
        let cipher = Affine::with_defaults().unwrap();
        assert_eq!(cipher.encrypt(""), "");
        assert_eq!(cipher.decrypt(""), "");
    }
}
