//! The shared 26-letter alphabet and substitution tables built over it.
//!
//! Affine, Atbash and Caesar are all index permutations of the same
//! alphabet, so they share one table type: a forward permutation and its
//! inverse, computed once at construction and read-only afterwards.
//!
//! # Normalization
//!
//! Input is uppercased with ASCII rules only. A character is a letter if and
//! only if it is in `A..=Z` after uppercasing; everything else (digits,
//! punctuation, whitespace, non-ASCII letters) is left untouched.
//!
//! # Example
//! ```
//! use secret_messages_core::alphabet::SubstitutionTable;
//!
//! let table = SubstitutionTable::shifted(3);
//! assert_eq!(table.encrypt("Hello, world"), "KHOOR, ZRUOG");
//! assert_eq!(table.decrypt("KHOOR, ZRUOG"), "HELLO, WORLD");
//! ```

use crate::error::{CharsetError, KeyError};

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in index order.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Marker for an inverse slot that has not been claimed yet.
const UNSET: u8 = u8::MAX;

/// Return the alphabet index (0-25) of an uppercase ASCII letter.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Return the letter at `index`, wrapping modulo 26.
pub fn letter_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN] as char
}

/// How characters outside the ASCII alphabet are treated before a message
/// reaches a cipher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharsetPolicy {
    /// Treat non-ASCII characters as non-alphabetic.
    #[default]
    PassThrough,
    /// Refuse messages containing alphabetic characters outside A-Z.
    Reject,
}

impl CharsetPolicy {
    /// Validate `text` under this policy.
    pub fn check(self, text: &str) -> Result<(), CharsetError> {
        match self {
            CharsetPolicy::PassThrough => Ok(()),
            CharsetPolicy::Reject => check_charset(text),
        }
    }
}

/// Find the first character that is alphabetic but not an ASCII letter.
///
/// Positions are counted in characters, not bytes.
pub fn check_charset(text: &str) -> Result<(), CharsetError> {
    match text
        .chars()
        .enumerate()
        .find(|(_, ch)| ch.is_alphabetic() && !ch.is_ascii_alphabetic())
    {
        Some((position, ch)) => Err(CharsetError::UnmappedCharacter { ch, position }),
        None => Ok(()),
    }
}

/// A bijective mapping from alphabet indices to alphabet letters.
///
/// # Invariants
/// - `forward` is a permutation of `0..26`
/// - `inverse[forward[i]] == i` for every index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl SubstitutionTable {
    /// Build a table where index `i` maps to index `f(i) mod 26`.
    ///
    /// # Errors
    /// Returns `KeyError::NotBijective` if two indices map to the same letter.
    pub fn from_fn<F>(f: F) -> Result<Self, KeyError>
    where
        F: Fn(usize) -> usize,
    {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [UNSET; ALPHABET_LEN];

        for (i, slot) in forward.iter_mut().enumerate() {
            let target = f(i) % ALPHABET_LEN;
            if inverse[target] != UNSET {
                return Err(KeyError::NotBijective {
                    letter: letter_at(target),
                });
            }
            *slot = target as u8;
            inverse[target] = i as u8;
        }

        Ok(Self { forward, inverse })
    }

    /// Uniform shift: index `i` maps to `(i + shift) mod 26`.
    ///
    /// Any integer is accepted; negative shifts move left.
    pub fn shifted(shift: i64) -> Self {
        let k = shift.rem_euclid(ALPHABET_LEN as i64) as usize;
        Self::rotation(k)
    }

    /// Alphabet reversal: index `i` maps to `25 - i`.
    pub fn reversed() -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = (ALPHABET_LEN - 1 - i) as u8;
        }
        Self {
            forward,
            inverse: forward,
        }
    }

    fn rotation(k: usize) -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            let target = (i + k) % ALPHABET_LEN;
            *slot = target as u8;
            inverse[target] = i as u8;
        }
        Self { forward, inverse }
    }

    /// Map a single character forward. Non-letters are returned unchanged.
    pub fn encrypt_char(&self, c: char) -> char {
        substitute(&self.forward, c)
    }

    /// Map a single character backward. Non-letters are returned unchanged.
    pub fn decrypt_char(&self, c: char) -> char {
        substitute(&self.inverse, c)
    }

    /// Apply the forward mapping to every letter in `text`.
    pub fn encrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Apply the inverse mapping to every letter in `text`.
    pub fn decrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.decrypt_char(c)).collect()
    }

    /// The cipher alphabet: the image of `A..=Z` under the forward mapping.
    pub fn cipher_alphabet(&self) -> String {
        self.forward.iter().map(|&i| letter_at(i as usize)).collect()
    }

    /// True when the mapping is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }
}

fn substitute(table: &[u8; ALPHABET_LEN], c: char) -> char {
    let c = c.to_ascii_uppercase();
    match index_of(c) {
        Some(i) => letter_at(table[i] as usize),
        None => c,
    }
}
