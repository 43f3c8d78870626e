//! `get` — verify a credential against the current master secret.

use crate::cli::output;
use crate::errors::Result;
use crate::vault::{Session, Verification};

/// Execute the `get` command.
///
/// Prints the derived hex fingerprint when the record matches the
/// session's master secret.  A missing identifier is a normal outcome,
/// reported distinctly from authentication failure.
pub fn execute(session: &Session, identifier: &str) -> Result<()> {
    match session.verify(identifier)? {
        Verification::Verified(recovered) => {
            println!("{recovered}");
        }
        Verification::NotFound => {
            output::info(&format!("No record under '{identifier}'"));
            output::tip("Run `list` to see committed identifiers.");
        }
    }

    Ok(())
}
