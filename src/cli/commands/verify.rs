//! `credvault verify`: check a password against a stored entry.

use crate::cli::{open_store, output, read_secret, Cli, SECRET_ENV};
use crate::errors::Result;

/// Execute the `verify` command.
pub fn execute(cli: &Cli, label: &str) -> Result<()> {
    let (_, store) = open_store(cli)?;
    let password = read_secret(SECRET_ENV, &format!("Password for {label}"), false)?;

    // A denial surfaces as an error so the exit code reflects it.
    store.authenticate(label, &password)?.into_grant()?;

    output::success(&format!("Password matches '{label}'"));
    Ok(())
}
