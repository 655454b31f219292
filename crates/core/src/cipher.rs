//! The contract every cipher variant implements.

/// Uniform encrypt/decrypt capability.
///
/// Implementations are immutable after construction, so a single instance
/// can be shared across threads and called concurrently.
///
/// # Contract
/// - Input is case-insensitive; output letters are uppercase.
/// - Empty input yields empty output.
/// - Neither operation fails once the cipher has been constructed.
/// - For a message `m` made only of letters,
///   `decrypt(&encrypt(m)) == m.to_ascii_uppercase()` (Bifid additionally
///   folds `J` into `I`).
pub trait Cipher: Send + Sync {
    /// Human-readable variant name.
    fn name(&self) -> &'static str;

    /// Apply the forward transformation.
    fn encrypt(&self, text: &str) -> String;

    /// Apply the inverse transformation.
    fn decrypt(&self, text: &str) -> String;
}
