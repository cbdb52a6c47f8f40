//! `credvault list`: display all entries in a table.

use chrono::Utc;

use crate::cli::{open_store, output, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, store) = open_store(cli)?;
    let entries = store.list()?;

    if entries.is_empty() {
        output::info("No passwords stored yet.");
        output::tip("Run `credvault add <LABEL>` to add your first entry.");
        return Ok(());
    }

    output::info(&format!("{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" }));
    output::print_entries_table(&entries, Utc::now());

    Ok(())
}
