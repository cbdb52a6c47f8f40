//! `credvault show`: print a single entry.

use chrono::Utc;

use crate::cli::{open_store, output, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, label: &str) -> Result<()> {
    let (_, store) = open_store(cli)?;
    let entry = store.find(label)?;
    output::print_entry(&entry, Utc::now());
    Ok(())
}
