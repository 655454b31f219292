//! secret-messages: encrypt and decrypt messages with classical ciphers.

mod config;
mod sample;
mod session;

use std::io::{self, IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use secret_messages_core::polybius::SIDE;
use secret_messages_core::{Action, AnyCipher, CipherKind, CipherParams};
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config};
use crate::session::Session;

fn main() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args_os()).unwrap_or_else(|err| err.exit());

    // Initialize tracing; RUST_LOG wins over --verbose
    let log_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    if config.print_config {
        config.print();
    }

    let stdout = io::stdout();
    match &config.command {
        Command::Encrypt { cipher, text } => {
            run_once(&mut stdout.lock(), &config, *cipher, Action::Encrypt, &text.join(" "))?;
        }
        Command::Decrypt { cipher, text } => {
            run_once(&mut stdout.lock(), &config, *cipher, Action::Decrypt, &text.join(" "))?;
        }
        Command::List => {
            list(&mut stdout.lock(), &config.params)?;
        }
        Command::Demo { seed, length } => {
            let seed = seed.unwrap_or_else(time_seed);
            let message = sample::generate_sample_message(seed, *length);
            let failures = sample::run_demo(&mut stdout.lock(), &config.params, seed, &message)?;
            if failures > 0 {
                anyhow::bail!("{} cipher(s) failed to round-trip", failures);
            }
        }
        Command::Interactive => {
            let clear = stdout.is_terminal();
            let mut session =
                Session::new(io::stdin().lock(), stdout.lock(), &config.params, config.charset)?
                    .with_clear_screen(clear);
            session.run()?;
        }
    }

    Ok(())
}

/// Encrypt or decrypt a single message and print the result.
fn run_once<W: Write>(
    out: &mut W,
    config: &Config,
    kind: CipherKind,
    action: Action,
    text: &str,
) -> anyhow::Result<()> {
    config.charset.check(text)?;
    let cipher = kind
        .build(&config.params)
        .with_context(|| format!("cannot construct {} cipher", kind))?;
    writeln!(out, "{}", action.apply(&cipher, text))?;
    Ok(())
}

/// Print every registered cipher with its table.
fn list<W: Write>(out: &mut W, params: &CipherParams) -> anyhow::Result<()> {
    writeln!(out, "plain:  ABCDEFGHIJKLMNOPQRSTUVWXYZ")?;
    for kind in CipherKind::ALL {
        match kind.build(params) {
            Ok(AnyCipher::Affine(c)) => writeln!(
                out,
                "{:<7} {} (alpha={}, beta={})",
                "Affine",
                c.table().cipher_alphabet(),
                c.alpha(),
                c.beta()
            )?,
            Ok(AnyCipher::Atbash(c)) => {
                writeln!(out, "{:<7} {}", "Atbash", c.table().cipher_alphabet())?
            }
            Ok(AnyCipher::Caesar(c)) => writeln!(
                out,
                "{:<7} {} (shift={})",
                "Caesar",
                c.table().cipher_alphabet(),
                c.shift()
            )?,
            Ok(AnyCipher::Bifid(c)) => {
                writeln!(
                    out,
                    "{:<7} Polybius square, J merged into I, non-letters: {:?}",
                    "Bifid",
                    c.policy()
                )?;
                for row in 1..=SIDE {
                    if let Some(letters) = c.square().row(row) {
                        writeln!(out, "        {}", letters)?;
                    }
                }
            }
            Err(err) => writeln!(out, "{:<7} unavailable: {}", kind.name(), err)?,
        }
    }
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
