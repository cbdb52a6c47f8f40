//! `credvault add`: store a new password entry.

use crate::cli::{output, parse_platforms, read_secret, Cli, SECRET_ENV};
use crate::crypto::ZxcvbnScorer;
use crate::errors::Result;
use crate::vault::CreateRequest;

/// Execute the `add` command.
pub fn execute(cli: &Cli, label: &str, platforms: &[String]) -> Result<()> {
    let platforms = parse_platforms(platforms)?;
    let (settings, mut store) = crate::cli::open_store(cli)?;

    // The prompt asks twice; env and piped input count as already confirmed.
    let password = read_secret(SECRET_ENV, &format!("Enter password for {label}"), true)?;

    let request = CreateRequest {
        label,
        plaintext: &password,
        confirmation: &password,
        platforms,
    };
    let strength = request.validate(&ZxcvbnScorer, settings.min_strength)?;
    output::print_strength(&strength);

    let entry = store.create(request.label, request.plaintext, request.platforms)?;

    crate::cli::record_audit(cli, "add", Some(&entry.label), None);
    output::success(&format!(
        "Stored '{}' (expires {})",
        entry.label,
        entry.expires_at.format("%Y-%m-%d")
    ));
    output::tip("Run `credvault expired` to see entries that need rotating.");

    Ok(())
}
