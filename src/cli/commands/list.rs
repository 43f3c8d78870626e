//! `list` — show metadata for all committed records.

use crate::cli::output;
use crate::errors::Result;
use crate::vault::Session;

/// Execute the `list` command.
///
/// Metadata only — no salts or derived bytes are shown.
pub fn execute(session: &Session) -> Result<()> {
    let records = session.list_records();
    output::print_records_table(&records);
    Ok(())
}
