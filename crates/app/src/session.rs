//! Interactive menu session.
//!
//! Flow for each message:
//!
//! ```text
//! Cipher Menu -> Action Menu -> message prompt -> result -> "another?" prompt
//! ```
//!
//! The session is a plain loop over generic reader/writer handles, so it
//! can be driven from stdin/stdout or from in-memory buffers in tests.
//! Choosing "Exit Program", answering `n` to the continue prompt, or
//! reaching end of input ends the session.

use std::io::{self, BufRead, Write};

use secret_messages_core::{Action, AnyCipher, CharsetPolicy, CipherKind, CipherParams};
use tracing::{debug, info};

/// Label of the extra entry appended to every menu.
const EXIT_LABEL: &str = "Exit Program";

/// ANSI: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// A numbered menu of choices, with "Exit Program" as the last entry.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    title: &'static str,
    entries: Vec<(&'static str, T)>,
}

impl<T: Copy> Menu<T> {
    pub fn new(title: &'static str, entries: Vec<(&'static str, T)>) -> Self {
        Self { title, entries }
    }

    /// Number of selectable entries, including "Exit Program".
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Print the menu.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} Menu:", self.title)?;
        for (n, (label, _)) in self.entries.iter().enumerate() {
            writeln!(out, "{}: {}", n + 1, label)?;
        }
        writeln!(out, "{}: {}", self.len(), EXIT_LABEL)
    }

    /// Resolve a typed choice. `Some(None)` means "Exit Program".
    pub fn resolve(&self, choice: &str) -> Option<Option<T>> {
        let n: usize = choice.trim().parse().ok()?;
        match n {
            0 => None,
            n if n <= self.entries.len() => Some(Some(self.entries[n - 1].1)),
            n if n == self.len() => Some(None),
            _ => None,
        }
    }
}

pub fn cipher_menu() -> Menu<CipherKind> {
    Menu::new(
        "Cipher",
        CipherKind::ALL.iter().map(|&kind| (kind.name(), kind)).collect(),
    )
}

pub fn action_menu() -> Menu<Action> {
    Menu::new(
        "Action",
        Action::ALL.iter().map(|&action| (action.name(), action)).collect(),
    )
}

/// Interactive session state.
pub struct Session<R, W> {
    input: R,
    output: W,
    /// Indexed by [`CipherKind::index`].
    ciphers: [AnyCipher; 4],
    charset: CharsetPolicy,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session, constructing every cipher up front.
    ///
    /// # Errors
    /// Fails if any cipher rejects its parameters (e.g. an invalid affine
    /// key), before anything is printed.
    pub fn new(
        input: R,
        output: W,
        params: &CipherParams,
        charset: CharsetPolicy,
    ) -> anyhow::Result<Self> {
        let [affine, atbash, bifid, caesar] = CipherKind::ALL.map(|kind| kind.build(params));
        let ciphers = [affine?, atbash?, bifid?, caesar?];

        Ok(Self {
            input,
            output,
            ciphers,
            charset,
            clear_screen: false,
        })
    }

    /// Enable or disable screen clearing between menus.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Run until the user exits. Returns the number of messages processed.
    pub fn run(&mut self) -> anyhow::Result<usize> {
        let mut processed = 0;

        while let Some(kind) = self.choose(&cipher_menu())? {
            self.clear()?;
            let Some(action) = self.choose(&action_menu())? else {
                break;
            };

            self.clear()?;
            writeln!(
                self.output,
                "Enter the text you would like to {}, with the {} cipher:",
                action.name().to_lowercase(),
                kind.name().to_lowercase()
            )?;
            let Some(message) = self.prompt("> ")? else {
                break;
            };

            if let Err(err) = self.charset.check(&message) {
                writeln!(
                    self.output,
                    "Cannot {} this message: {}",
                    action.name().to_lowercase(),
                    err
                )?;
            } else {
                let result = action.apply(self.cipher(kind), &message);
                debug!(cipher = kind.name(), action = action.name(), "message processed");
                writeln!(self.output, "{}", result)?;
                processed += 1;
            }

            writeln!(self.output, "\nWould you like to encrypt/decrypt another message? [Y,n]\n")?;
            match self.prompt("> ")? {
                Some(answer) if !answer.trim().eq_ignore_ascii_case("n") => self.clear()?,
                _ => break,
            }
        }

        info!(processed, "session ended");
        Ok(processed)
    }

    fn cipher(&self, kind: CipherKind) -> &AnyCipher {
        &self.ciphers[kind.index()]
    }

    /// Show `menu` until a valid choice is typed.
    ///
    /// Returns `None` on "Exit Program" or end of input.
    fn choose<T: Copy>(&mut self, menu: &Menu<T>) -> io::Result<Option<T>> {
        menu.render(&mut self.output)?;
        loop {
            writeln!(self.output, "\nChoose an option by entering its menu number.")?;
            let Some(choice) = self.prompt(">")? else {
                return Ok(None);
            };

            if let Some(picked) = menu.resolve(&choice) {
                return Ok(picked);
            }

            self.clear()?;
            writeln!(
                self.output,
                "'{}' is not a valid option. \nPlease enter a number 1-{}.\n",
                choice.trim(),
                menu.len()
            )?;
            menu.render(&mut self.output)?;
        }
    }

    /// Print `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secret_messages_core::NonAlphabetic;
    use std::io::Cursor;

    fn run_script(script: &str, params: &CipherParams, charset: CharsetPolicy) -> (usize, String) {
        let mut output = Vec::new();
        let processed = {
            let mut session =
                Session::new(Cursor::new(script.as_bytes()), &mut output, params, charset)
                    .unwrap();
            session.run().unwrap()
        };
        (processed, String::from_utf8(output).unwrap())
    }

    fn run_defaults(script: &str) -> (usize, String) {
        run_script(script, &CipherParams::default(), CharsetPolicy::PassThrough)
    }

    #[test]
    fn test_menu_resolve() {
        let menu = cipher_menu();
        assert_eq!(menu.len(), 5);
        assert_eq!(menu.resolve("1"), Some(Some(CipherKind::Affine)));
        assert_eq!(menu.resolve(" 4 "), Some(Some(CipherKind::Caesar)));
        assert_eq!(menu.resolve("5"), Some(None));
        assert_eq!(menu.resolve("0"), None);
        assert_eq!(menu.resolve("6"), None);
        assert_eq!(menu.resolve("caesar"), None);
    }

    #[test]
    fn test_menu_render() {
        let mut out = Vec::new();
        action_menu().render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Action Menu:\n1: Encrypt\n2: Decrypt\n3: Exit Program\n"
        );
    }

    #[test]
    fn test_single_encryption() {
        let (processed, output) = run_defaults("4\n1\nhello\nn\n");
        assert_eq!(processed, 1);
        assert!(
            output.contains("Enter the text you would like to encrypt, with the caesar cipher:")
        );
        assert!(output.contains("KHOOR\n"));
    }

    #[test]
    fn test_loops_until_declined() {
        let script = "2\n1\nHELLO\ny\n3\n2\nFNNVD\n\n1\n2\nRCLLA\nN\n";
        let (processed, output) = run_defaults(script);
        assert_eq!(processed, 3);
        assert!(output.contains("SVOOL\n"));
        assert!(output.contains("HELLO\n"));
        let continue_prompts =
            output.matches("Would you like to encrypt/decrypt another message?").count();
        assert_eq!(continue_prompts, 3);
    }

    #[test]
    fn test_every_menu_entry_uses_its_own_cipher() {
        let script = "1\n1\nHELLO\ny\n2\n1\nHELLO\ny\n3\n1\nHELLO\ny\n4\n1\nHELLO\nn\n";
        let (processed, output) = run_defaults(script);
        assert_eq!(processed, 4);
        let results: Vec<&str> = output
            .lines()
            .filter_map(|line| line.strip_prefix("> "))
            .filter(|rest| rest.len() == 5)
            .collect();
        assert_eq!(results, ["RCLLA", "SVOOL", "FNNVD", "KHOOR"]);
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (processed, output) = run_defaults("9\nabc\n4\n2\nKHOOR\nn\n");
        assert_eq!(processed, 1);
        assert!(output.contains("'9' is not a valid option. \nPlease enter a number 1-5."));
        assert!(output.contains("'abc' is not a valid option."));
        assert!(output.contains("HELLO\n"));
    }

    #[test]
    fn test_exit_from_menus() {
        let (processed, output) = run_defaults("5\n");
        assert_eq!(processed, 0);
        assert!(!output.contains("Action Menu:"));

        let (processed, _) = run_defaults("1\n3\n");
        assert_eq!(processed, 0);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (processed, _) = run_defaults("3\n1\n");
        assert_eq!(processed, 0);
        let (processed, _) = run_defaults("");
        assert_eq!(processed, 0);
    }

    #[test]
    fn test_strict_charset_refuses_message() {
        let script = "4\n1\nolé\nn\n";
        let (processed, output) =
            run_script(script, &CipherParams::default(), CharsetPolicy::Reject);
        assert_eq!(processed, 0);
        assert!(
            output.contains("Cannot encrypt this message: unmapped character 'é' at position 2")
        );
    }

    #[test]
    fn test_bifid_policy_reaches_session() {
        let params = CipherParams {
            bifid_non_alphabetic: NonAlphabetic::PassThrough,
            ..CipherParams::default()
        };
        let (_, output) = run_script("3\n1\nhe llo\nn\n", &params, CharsetPolicy::PassThrough);
        assert!(output.contains("FN NVD\n"));
    }

    #[test]
    fn test_invalid_affine_key_fails_upfront() {
        let params = CipherParams {
            affine_alpha: 4,
            ..CipherParams::default()
        };
        let result =
            Session::new(Cursor::new(&b""[..]), Vec::new(), &params, CharsetPolicy::PassThrough);
        assert!(result.is_err());
    }

    #[test]
    fn test_clear_screen_only_when_enabled() {
        let mut output = Vec::new();
        {
            let mut session = Session::new(
                Cursor::new(&b"4\n1\nhi\nn\n"[..]),
                &mut output,
                &CipherParams::default(),
                CharsetPolicy::PassThrough,
            )
            .unwrap()
            .with_clear_screen(true);
            session.run().unwrap();
        }
        assert!(String::from_utf8(output).unwrap().contains(CLEAR_SCREEN));

        let (_, output) = run_defaults("4\n1\nhi\nn\n");
        assert!(!output.contains(CLEAR_SCREEN));
    }
}
