//! secret-messages-core: classical ciphers over the 26-letter Latin alphabet
//!
//! This library provides four pedagogical ciphers behind one contract:
//! - Affine: `E(i) = (alpha * i + beta) mod 26`
//! - Atbash: alphabet reversal
//! - Caesar: uniform shift
//! - Bifid: Polybius square with coordinate fractionation
//!
//! None of these offer any security; they are trivially breakable.
//!
//! # Architecture
//!
//! The crate is organized around clear module boundaries:
//! - `alphabet`: the A-Z alphabet, charset checks and substitution tables
//! - `polybius`: the 5x5 square and its coordinate lookups
//! - `cipher`: the [`Cipher`] contract
//! - `affine`, `atbash`, `caesar`, `bifid`: the variants
//! - `registry`: closed tag-to-constructor mapping for front ends
//!
//! # Design Principles
//!
//! - **Validate at construction**: a cipher that exists can always decrypt
//! - **Immutable**: tables are built once and shared freely across threads
//! - **Total**: encrypt and decrypt never fail and never panic
//!
//! # Example
//! ```
//! use secret_messages_core::{Bifid, Cipher};
//!
//! let bifid = Bifid::new();
//! assert_eq!(bifid.encrypt("hello"), "FNNVD");
//! assert_eq!(bifid.decrypt("FNNVD"), "HELLO");
//! ```

pub mod affine;
pub mod alphabet;
pub mod atbash;
pub mod bifid;
pub mod caesar;
pub mod cipher;
pub mod error;
pub mod polybius;
pub mod registry;

// Re-export commonly used types
pub use affine::Affine;
pub use alphabet::{check_charset, CharsetPolicy, SubstitutionTable};
pub use atbash::Atbash;
pub use bifid::{Bifid, NonAlphabetic};
pub use caesar::Caesar;
pub use cipher::Cipher;
pub use error::{Error, Result};
pub use registry::{Action, AnyCipher, CipherKind, CipherParams};
