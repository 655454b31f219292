//! Closed registry of cipher variants.
//!
//! Front ends pick a variant by tag (or by name via `FromStr`) and build it
//! from a [`CipherParams`]. The set of variants is fixed at compile time.
//!
//! # Example
//! ```
//! use secret_messages_core::{Action, CipherKind, CipherParams};
//!
//! let cipher = "caesar".parse::<CipherKind>()?.build(&CipherParams::default())?;
//! assert_eq!(Action::Encrypt.apply(&cipher, "hello"), "KHOOR");
//! # Ok::<(), secret_messages_core::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::affine::{Affine, DEFAULT_ALPHA, DEFAULT_BETA};
use crate::atbash::Atbash;
use crate::bifid::{Bifid, NonAlphabetic};
use crate::caesar::{Caesar, DEFAULT_SHIFT};
use crate::cipher::Cipher;
use crate::error::{Error, RegistryError, Result};

/// Construction parameters for every registered variant.
///
/// Variants ignore the fields that do not concern them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParams {
    pub affine_alpha: i64,
    pub affine_beta: i64,
    pub caesar_shift: i64,
    pub bifid_non_alphabetic: NonAlphabetic,
}

impl Default for CipherParams {
    fn default() -> Self {
        Self {
            affine_alpha: DEFAULT_ALPHA,
            affine_beta: DEFAULT_BETA,
            caesar_shift: DEFAULT_SHIFT,
            bifid_non_alphabetic: NonAlphabetic::Drop,
        }
    }
}

/// Tag for each registered variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Affine,
    Atbash,
    Bifid,
    Caesar,
}

impl CipherKind {
    /// All variants, in menu order.
    pub const ALL: [CipherKind; 4] = [
        CipherKind::Affine,
        CipherKind::Atbash,
        CipherKind::Bifid,
        CipherKind::Caesar,
    ];

    /// Position of this variant in [`CipherKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Affine => "Affine",
            CipherKind::Atbash => "Atbash",
            CipherKind::Bifid => "Bifid",
            CipherKind::Caesar => "Caesar",
        }
    }

    /// Construct the variant.
    ///
    /// # Errors
    /// Only `Affine` can fail, with `KeyError::InvalidAffineKey`.
    pub fn build(self, params: &CipherParams) -> Result<AnyCipher> {
        Ok(match self {
            CipherKind::Affine => {
                AnyCipher::Affine(Affine::new(params.affine_alpha, params.affine_beta)?)
            }
            CipherKind::Atbash => AnyCipher::Atbash(Atbash::new()),
            CipherKind::Bifid => AnyCipher::Bifid(Bifid::with_policy(params.bifid_non_alphabetic)),
            CipherKind::Caesar => AnyCipher::Caesar(Caesar::new(params.caesar_shift)),
        })
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownCipher(s.to_string()).into())
    }
}

/// A constructed cipher of any registered variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyCipher {
    Affine(Affine),
    Atbash(Atbash),
    Bifid(Bifid),
    Caesar(Caesar),
}

impl AnyCipher {
    pub fn kind(&self) -> CipherKind {
        match self {
            AnyCipher::Affine(_) => CipherKind::Affine,
            AnyCipher::Atbash(_) => CipherKind::Atbash,
            AnyCipher::Bifid(_) => CipherKind::Bifid,
            AnyCipher::Caesar(_) => CipherKind::Caesar,
        }
    }

    fn inner(&self) -> &dyn Cipher {
        match self {
            AnyCipher::Affine(c) => c,
            AnyCipher::Atbash(c) => c,
            AnyCipher::Bifid(c) => c,
            AnyCipher::Caesar(c) => c,
        }
    }
}

impl Cipher for AnyCipher {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn encrypt(&self, text: &str) -> String {
        self.inner().encrypt(text)
    }

    fn decrypt(&self, text: &str) -> String {
        self.inner().decrypt(text)
    }
}

/// Direction of a cipher call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Encrypt,
    Decrypt,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Encrypt, Action::Decrypt];

    pub fn name(self) -> &'static str {
        match self {
            Action::Encrypt => "Encrypt",
            Action::Decrypt => "Decrypt",
        }
    }

    /// Run `cipher` in this direction.
    pub fn apply(self, cipher: &dyn Cipher, text: &str) -> String {
        match self {
            Action::Encrypt => cipher.encrypt(text),
            Action::Decrypt => cipher.decrypt(text),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Action::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownAction(s.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyError;

    #[test]
    fn test_parse_names() {
        assert_eq!("affine".parse::<CipherKind>().unwrap(), CipherKind::Affine);
        assert_eq!(" BIFID ".parse::<CipherKind>().unwrap(), CipherKind::Bifid);
        assert_eq!("Caesar".parse::<CipherKind>().unwrap(), CipherKind::Caesar);
        assert_eq!("decrypt".parse::<Action>().unwrap(), Action::Decrypt);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            "vigenere".parse::<CipherKind>().unwrap_err(),
            Error::Registry(RegistryError::UnknownCipher("vigenere".to_string()))
        );
        assert!("shred".parse::<Action>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in CipherKind::ALL {
            assert_eq!(kind.to_string().parse::<CipherKind>().unwrap(), kind);
        }
        for action in Action::ALL {
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_index_matches_menu_order() {
        for (position, kind) in CipherKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), position);
            assert_eq!(CipherKind::ALL[kind.index()], kind);
        }
    }

    #[test]
    fn test_build_all_defaults() {
        let params = CipherParams::default();
        for kind in CipherKind::ALL {
            let cipher = kind.build(&params).unwrap();
            assert_eq!(cipher.kind(), kind);
            assert_eq!(cipher.name(), kind.name());
        }
    }

    #[test]
    fn test_build_propagates_key_error() {
        let params = CipherParams {
            affine_alpha: 13,
            ..CipherParams::default()
        };
        assert_eq!(
            CipherKind::Affine.build(&params).unwrap_err(),
            Error::Key(KeyError::InvalidAffineKey { alpha: 13 })
        );
        assert!(CipherKind::Caesar.build(&params).is_ok());
    }

    #[test]
    fn test_action_apply() {
        let cipher = CipherKind::Atbash.build(&CipherParams::default()).unwrap();
        assert_eq!(Action::Encrypt.apply(&cipher, "HELLO"), "SVOOL");
        assert_eq!(Action::Decrypt.apply(&cipher, "SVOOL"), "HELLO");
    }
}
