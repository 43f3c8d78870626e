//! Interactive session loop — the driver behind the `credvault` binary.
//!
//! The master secret is prompted once (masked), a `Session` is built,
//! and commands are dispatched until `exit` or end of input.  When
//! stdin is not a terminal, commands and secrets are read line-by-line
//! so the binary can be scripted and tested.

use std::io::{self, IsTerminal};

use zeroize::Zeroizing;

use crate::cli::{commands, output, prompt_master_secret, Cli};
use crate::config::Settings;
use crate::errors::{CredVaultError, Result};
use crate::vault::{MasterSecret, Session};

/// Where the loop reads its lines from.
enum LineSource {
    /// Stdin is a terminal: use dialoguer prompts (masked for secrets).
    Interactive,

    /// Stdin is a pipe: consume it line-by-line.
    Piped(io::Lines<io::StdinLock<'static>>),
}

impl LineSource {
    fn new() -> Self {
        if io::stdin().is_terminal() {
            LineSource::Interactive
        } else {
            LineSource::Piped(io::stdin().lines())
        }
    }

    /// Read the next command line.  `None` means end of input.
    fn next_command(&mut self) -> Result<Option<String>> {
        match self {
            LineSource::Interactive => {
                let line: String = dialoguer::Input::new()
                    .with_prompt("credvault")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| CredVaultError::CommandFailed(format!("input prompt: {e}")))?;
                Ok(Some(line))
            }
            LineSource::Piped(lines) => match lines.next() {
                Some(line) => Ok(Some(line?)),
                None => Ok(None),
            },
        }
    }

    /// Read a secret value (masked when interactive).
    fn next_secret(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        match self {
            LineSource::Interactive => {
                let secret = dialoguer::Password::new()
                    .with_prompt(prompt)
                    .allow_empty_password(true)
                    .interact()
                    .map_err(|e| CredVaultError::CommandFailed(format!("secret prompt: {e}")))?;
                Ok(Zeroizing::new(secret))
            }
            LineSource::Piped(lines) => match lines.next() {
                Some(line) => Ok(Zeroizing::new(line?)),
                None => Err(CredVaultError::CommandFailed(
                    "unexpected end of input while reading a secret".into(),
                )),
            },
        }
    }
}

/// Run a full vault session: prompt for the master secret, then loop
/// over commands until `exit` or end of input.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(std::path::Path::new(&cli.config_dir))?;

    let mut params = settings.kdf_params();
    if let Some(iterations) = cli.iterations {
        params.iterations = iterations;
    }

    let master = prompt_master_secret()?;
    let mut session = Session::new(MasterSecret::new(master.to_string()), params);

    let mut source = LineSource::new();

    if matches!(source, LineSource::Interactive) {
        output::info("CredVault session started — records live only for this process.");
        print_help();
    }

    loop {
        let line = match source.next_command()? {
            Some(line) => line,
            None => break, // EOF behaves like `exit`
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let result = match command {
            "set" => run_set(&mut session, &mut source, rest),
            "get" => run_get(&session, rest),
            "generate" => run_generate(&settings, rest),
            "list" => commands::list::execute(&session),
            "help" | "?" => {
                print_help();
                Ok(())
            }
            "exit" | "quit" => break,
            other => {
                output::warning(&format!(
                    "Unknown command '{other}' — type `help` for the command list."
                ));
                Ok(())
            }
        };

        // Failures are printed and the loop re-prompts; nothing is retried.
        if let Err(e) = result {
            output::error(&e.to_string());
        }
    }

    Ok(())
}

fn run_set(session: &mut Session, source: &mut LineSource, identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(CredVaultError::InvalidInput("usage: set <identifier>".into()));
    }

    let secret = source.next_secret(&format!("Enter secret for {identifier}"))?;
    commands::set::execute(session, identifier, &secret)
}

fn run_get(session: &Session, identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(CredVaultError::InvalidInput("usage: get <identifier>".into()));
    }

    commands::get::execute(session, identifier)
}

fn run_generate(settings: &Settings, arg: &str) -> Result<()> {
    let length = if arg.is_empty() {
        settings.default_generate_length
    } else {
        arg.parse::<usize>().map_err(|_| {
            CredVaultError::InvalidInput(format!(
                "length must be a non-negative integer (got '{arg}')"
            ))
        })?
    };

    commands::generate::execute(length)
}

fn print_help() {
    output::tip("Commands:");
    output::tip("  set <identifier>    commit a secret under an identifier");
    output::tip("  get <identifier>    verify a record against the master password");
    output::tip("  generate [length]   generate a random password");
    output::tip("  list                show committed identifiers");
    output::tip("  exit                end the session (vault is discarded)");
}
