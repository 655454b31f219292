//! Configuration for the secret-messages application.
//!
//! Handles parsing command-line arguments into a resolved [`Config`].
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no subcommand it starts the
//! interactive menu, and every cipher parameter has the canonical default.

use clap::{Parser, Subcommand};
use secret_messages_core::affine::{DEFAULT_ALPHA, DEFAULT_BETA};
use secret_messages_core::caesar::DEFAULT_SHIFT;
use secret_messages_core::{CharsetPolicy, CipherKind, CipherParams, NonAlphabetic};

/// Default length of generated demo messages, in characters.
pub const DEFAULT_DEMO_LENGTH: usize = 48;

#[derive(Debug, Parser)]
#[command(name = "secret-messages")]
#[command(about = "Encrypt and decrypt messages with classical ciphers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Affine multiplier (must be coprime with 26)
    #[arg(long, global = true, default_value_t = DEFAULT_ALPHA, allow_hyphen_values = true)]
    pub alpha: i64,

    /// Affine offset
    #[arg(long, global = true, default_value_t = DEFAULT_BETA, allow_hyphen_values = true)]
    pub beta: i64,

    /// Caesar shift
    #[arg(long, global = true, default_value_t = DEFAULT_SHIFT, allow_hyphen_values = true)]
    pub shift: i64,

    /// Keep non-letters in place for Bifid instead of dropping them
    #[arg(long, global = true)]
    pub bifid_keep_non_alpha: bool,

    /// Reject messages containing letters outside A-Z
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print resolved configuration
    #[arg(long, global = true)]
    pub print_config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Encrypt a message
    Encrypt {
        /// Cipher name (affine, atbash, bifid, caesar)
        cipher: CipherKind,

        /// Message words; joined with single spaces
        #[arg(required = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Decrypt a message
    Decrypt {
        /// Cipher name (affine, atbash, bifid, caesar)
        cipher: CipherKind,

        /// Message words; joined with single spaces
        #[arg(required = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List the available ciphers and their tables
    List,

    /// Round-trip a generated message through every cipher
    Demo {
        /// Random seed for determinism (default: time-based)
        #[arg(long)]
        seed: Option<u64>,

        /// Message length in characters
        #[arg(long, default_value_t = DEFAULT_DEMO_LENGTH)]
        length: usize,
    },

    /// Menu-driven session (the default)
    Interactive,
}

/// Complete configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// What to do
    pub command: Command,

    /// Construction parameters for every cipher
    pub params: CipherParams,

    /// Treatment of letters outside A-Z
    pub charset: CharsetPolicy,

    /// Whether to log at debug level
    pub verbose: bool,

    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (including argv[0]).
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from_cli)
    }

    /// Resolve a parsed command line.
    pub fn from_cli(cli: Cli) -> Self {
        let bifid_non_alphabetic = if cli.bifid_keep_non_alpha {
            NonAlphabetic::PassThrough
        } else {
            NonAlphabetic::Drop
        };

        Config {
            command: cli.command.unwrap_or(Command::Interactive),
            params: CipherParams {
                affine_alpha: cli.alpha,
                affine_beta: cli.beta,
                caesar_shift: cli.shift,
                bifid_non_alphabetic,
            },
            charset: if cli.strict {
                CharsetPolicy::Reject
            } else {
                CharsetPolicy::PassThrough
            },
            verbose: cli.verbose,
            print_config: cli.print_config,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Command: {:?}", self.command);
        println!();
        println!("=== Ciphers ===");
        println!("Affine: alpha={} beta={}", self.params.affine_alpha, self.params.affine_beta);
        println!("Caesar: shift={}", self.params.caesar_shift);
        println!("Bifid non-letters: {:?}", self.params.bifid_non_alphabetic);
        println!();
        println!("=== Input ===");
        println!("Charset policy: {:?}", self.charset);
        println!();
    }
}
