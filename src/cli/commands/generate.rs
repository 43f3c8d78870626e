//! `generate` — produce a random password.

use crate::errors::Result;
use crate::generator;

/// Execute the `generate` command.
pub fn execute(length: usize) -> Result<()> {
    let password = generator::generate(length);
    println!("{password}");
    Ok(())
}
