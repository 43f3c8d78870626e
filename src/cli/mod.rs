//! CLI module — Clap argument parser, output helpers, and the
//! interactive session loop.

pub mod commands;
pub mod output;
pub mod repl;

use clap::Parser;

use zeroize::Zeroizing;

use crate::errors::{CredVaultError, Result};

/// CredVault CLI: in-memory credential verification vault.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "In-memory credential verification vault and password generator",
    version
)]
pub struct Cli {
    /// Directory to load .credvault.toml from (default: current directory)
    #[arg(long, default_value = ".")]
    pub config_dir: String,

    /// Override the PBKDF2 iteration count for this session
    #[arg(long)]
    pub iterations: Option<u32>,
}

/// Get the master secret for this session, trying in order:
/// 1. `CREDVAULT_PASSWORD` env var (CI/scripted use)
/// 2. Interactive masked prompt
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn prompt_master_secret() -> Result<Zeroizing<String>> {
    // 1. Check the environment variable first (CI/scripting friendly).
    if let Ok(secret) = std::env::var("CREDVAULT_PASSWORD") {
        if !secret.is_empty() {
            return Ok(Zeroizing::new(secret));
        }
    }

    // 2. Fall back to an interactive masked prompt.
    let secret = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| CredVaultError::CommandFailed(format!("password prompt: {e}")))?;

    if secret.is_empty() {
        return Err(CredVaultError::EmptySecret);
    }

    Ok(Zeroizing::new(secret))
}
