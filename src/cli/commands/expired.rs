//! `credvault expired`: list entries past their expiry date.

use chrono::Utc;

use crate::cli::{open_store, output, Cli};
use crate::errors::Result;

/// Execute the `expired` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, store) = open_store(cli)?;
    let now = Utc::now();
    let expired = store.list_expired(now)?;

    if expired.is_empty() {
        output::success("No expired passwords.");
        return Ok(());
    }

    output::warning(&format!("{} expired password(s):", expired.len()));
    output::print_entries_table(&expired, now);
    output::tip("Change them with `credvault edit <LABEL> --new-password`.");
    Ok(())
}
