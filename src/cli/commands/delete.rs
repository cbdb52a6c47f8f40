//! `credvault delete`: remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::{open_store, output, read_secret, Cli, SECRET_ENV};
use crate::errors::{CredVaultError, Result};
use crate::vault::{ConfirmOutcome, ConfirmationGate};

/// Execute the `delete` command.
///
/// The entry's password is checked first, and only the entry it matches is
/// removed. The delete then needs two presses on the confirmation gate:
/// the first arms it, and the answer to the prompt (or `--force`) is the
/// second.
pub fn execute(cli: &Cli, label: &str, force: bool) -> Result<()> {
    let (settings, mut store) = open_store(cli)?;

    let password = read_secret(SECRET_ENV, &format!("Password for {label}"), false)?;
    let grant = store.authenticate(label, &password)?.into_grant()?;

    let window = if force {
        settings.confirm_window()
    } else {
        settings.prompt_confirm_window()
    };
    let mut gate = ConfirmationGate::new(window);
    gate.request_now(label);

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{label}'?"))
            .default(false)
            .interact()
            .map_err(|e| CredVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            gate.reset(label);
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let confirmation = match gate.request_now(label) {
        ConfirmOutcome::Confirmed(c) => c,
        ConfirmOutcome::AwaitingConfirmation => {
            return Err(CredVaultError::ConfirmationExpired(label.to_string()));
        }
    };

    let removed = store.delete(&grant, confirmation)?;

    crate::cli::record_audit(cli, "delete", Some(&removed.label), None);
    output::success(&format!("Deleted '{}'", removed.label));

    if store.find(label).is_ok() {
        output::tip(&format!(
            "Other entries named '{label}' have different passwords and were kept."
        ));
    }

    Ok(())
}
