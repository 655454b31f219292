//! Error types for the secret-messages cipher library.
//!
//! Errors are only raised at construction time or by explicit validation
//! helpers. Once a cipher has been built, encrypt and decrypt never fail:
//! empty input and input without letters simply produce empty or unchanged
//! output.

use thiserror::Error;

/// Top-level error type for all fallible operations in the library.
///
/// Each variant corresponds to a specific failure domain:
/// - Key: cipher parameters that cannot yield a reversible table
/// - Charset: characters outside the supported A-Z alphabet
/// - Registry: cipher or action names that are not registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Cipher key rejected at construction
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// Message contains a character the alphabet cannot map
    #[error("charset error: {0}")]
    Charset(#[from] CharsetError),

    /// Unknown cipher variant or action tag
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Cipher key errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Affine multiplier shares a factor with the alphabet size
    #[error("invalid affine key: alpha {alpha} is not coprime with 26")]
    InvalidAffineKey { alpha: i64 },

    /// Two alphabet indices were mapped onto the same letter
    #[error("substitution table is not a bijection: '{letter}' is produced more than once")]
    NotBijective { letter: char },
}

/// Character set errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    /// Alphabetic character outside A-Z (e.g. an accented letter)
    #[error("unmapped character {ch:?} at position {position}")]
    UnmappedCharacter { ch: char, position: usize },
}

/// Registry lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No cipher is registered under this name
    #[error("unknown cipher: {0:?}")]
    UnknownCipher(String),

    /// No action is registered under this name
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
