//! `credvault search`: filter entries by label.

use chrono::Utc;

use crate::cli::{open_store, output, Cli};
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let (_, store) = open_store(cli)?;
    let found = store.search(query)?;

    if found.is_empty() {
        output::info(&format!("No entries match '{query}'."));
        return Ok(());
    }

    output::print_entries_table(&found, Utc::now());
    Ok(())
}
