//! `set` — commit a credential under an identifier.

use crate::cli::output;
use crate::errors::Result;
use crate::vault::Session;

/// Execute the `set` command.
///
/// The secret has already been read (masked prompt or piped line) by
/// the session loop; this just commits it and reports the outcome.
pub fn execute(session: &mut Session, identifier: &str, secret: &str) -> Result<()> {
    let existed = session.contains(identifier);

    session.commit(identifier, secret)?;

    let op = if existed { "updated" } else { "added" };
    output::success(&format!(
        "Record '{}' {} ({} total)",
        identifier,
        op,
        session.record_count()
    ));

    Ok(())
}
