//! Sample message generation and the round-trip demo.
//!
//! When asked for a demo, we generate a message with interesting cipher
//! characteristics: mixed case, punctuation, digits and the occasional `J`.
//!
//! # Design
//!
//! Generated text has:
//! - Words drawn from a fixed list (some containing `J`, which Bifid folds)
//! - Random capitalization
//! - Punctuation and digits between words
//!
//! This makes the per-cipher treatment of non-letters visible in the output.

use std::io::Write;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use secret_messages_core::{Cipher, CipherKind, CipherParams, NonAlphabetic};

const WORDS: &[&str] = &[
    "attack", "dawn", "jolly", "river", "quartz", "jump", "the", "secret", "meet", "at", "mill",
    "zebra", "fox", "over", "jinx", "signal", "north", "wall", "bring", "snacks",
];

const SEPARATORS: &[&str] = &[" ", " ", " ", ", ", ". ", "! ", "? ", " - "];

/// Generate a sample message of exactly `length` characters.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `length`: number of characters in the message
pub fn generate_sample_message(seed: u64, length: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut message = String::with_capacity(length + 16);

    while message.len() < length {
        let word = WORDS[rng.gen_range(0..WORDS.len())];

        // 20% capitalized, 10% shouted
        match rng.gen_range(0..10) {
            0..=1 => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    message.push(first.to_ascii_uppercase());
                    message.push_str(chars.as_str());
                }
            }
            2 => message.push_str(&word.to_ascii_uppercase()),
            _ => message.push_str(word),
        }

        // 10% of words are followed by a number
        if rng.gen_range(0..10) == 0 {
            message.push(' ');
            message.push_str(&rng.gen_range(1..100u32).to_string());
        }

        message.push_str(SEPARATORS[rng.gen_range(0..SEPARATORS.len())]);
    }

    // Everything generated is ASCII, so byte truncation is safe
    message.truncate(length);
    message
}

/// What `decrypt(encrypt(message))` should return for a variant.
pub fn expected_round_trip(kind: CipherKind, params: &CipherParams, message: &str) -> String {
    let upper = message.to_ascii_uppercase();
    if kind != CipherKind::Bifid {
        return upper;
    }

    let folded = upper.replace('J', "I");
    match params.bifid_non_alphabetic {
        NonAlphabetic::Drop => folded.chars().filter(char::is_ascii_alphabetic).collect(),
        NonAlphabetic::PassThrough => folded,
    }
}

/// Run `message` through every registered cipher and report the results.
///
/// Returns the number of variants whose round trip did not match.
pub fn run_demo<W: Write>(
    out: &mut W,
    params: &CipherParams,
    seed: u64,
    message: &str,
) -> anyhow::Result<usize> {
    writeln!(out, "=== Demo (seed {}) ===", seed)?;
    writeln!(out, "Message: {}", message)?;
    writeln!(out)?;

    let mut failures = 0;
    for kind in CipherKind::ALL {
        let cipher = kind.build(params)?;
        let ciphertext = cipher.encrypt(message);
        let recovered = cipher.decrypt(&ciphertext);
        let ok = recovered == expected_round_trip(kind, params, message);
        if !ok {
            tracing::warn!(cipher = kind.name(), "round trip mismatch");
            failures += 1;
        }

        writeln!(out, "{}:", kind)?;
        writeln!(out, "  ciphertext: {}", ciphertext)?;
        writeln!(out, "  decrypted:  {}", recovered)?;
        writeln!(out, "  round trip: {}", if ok { "ok" } else { "MISMATCH" })?;
    }

    Ok(failures)
}
