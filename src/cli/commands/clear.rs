//! `credvault clear`: remove every stored entry.

use dialoguer::Confirm;

use crate::cli::{open_store, output, Cli};
use crate::errors::{CredVaultError, Result};

/// Execute the `clear` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let (_, mut store) = open_store(cli)?;
    let count = store.list()?.len();

    if count == 0 {
        output::info("Vault is already empty.");
        return Ok(());
    }

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Clear all {count} stored password(s)?"))
            .default(false)
            .interact()
            .map_err(|e| CredVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.clear_all()?;

    crate::cli::record_audit(cli, "clear", None, Some(&format!("{count} entries")));
    output::success(&format!("Cleared {count} password(s)"));

    Ok(())
}
