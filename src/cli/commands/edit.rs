//! `credvault edit`: change an entry after re-entering its password.

use crate::cli::{open_store, output, parse_platforms, read_secret, Cli, NEW_SECRET_ENV, SECRET_ENV};
use crate::crypto::ZxcvbnScorer;
use crate::errors::Result;
use crate::vault::{CreateRequest, EntryChanges, Platforms};

/// Flags accepted by `edit`.
pub struct EditArgs<'a> {
    pub new_label: Option<&'a str>,
    pub new_password: bool,
    pub platforms: &'a [String],
    pub clear_platforms: bool,
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, label: &str, args: &EditArgs<'_>) -> Result<()> {
    let (settings, mut store) = open_store(cli)?;

    let current = read_secret(SECRET_ENV, &format!("Current password for {label}"), false)?;
    let grant = store.authenticate(label, &current)?.into_grant()?;

    let mut changes = EntryChanges {
        new_label: args.new_label.map(str::to_string),
        ..EntryChanges::default()
    };

    if args.new_password {
        let password = read_secret(NEW_SECRET_ENV, "New password", true)?;
        let strength = CreateRequest {
            label: args.new_label.unwrap_or(label),
            plaintext: &password,
            confirmation: &password,
            platforms: Platforms::new(),
        }
        .validate(&ZxcvbnScorer, settings.min_strength)?;
        output::print_strength(&strength);
        changes.new_plaintext = Some(password.to_string());
    }

    if args.clear_platforms {
        changes.new_platforms = Some(Platforms::new());
    } else if !args.platforms.is_empty() {
        changes.new_platforms = Some(parse_platforms(args.platforms)?);
    }

    if changes.is_empty() {
        output::info("Nothing to change.");
        output::tip("Pass --label, --new-password, --platform or --clear-platforms.");
        return Ok(());
    }

    let details = describe(&changes);
    let entry = store.update(&grant, changes)?;

    crate::cli::record_audit(cli, "edit", Some(label), Some(&details));
    output::success(&format!("Updated '{}'", entry.label));

    Ok(())
}

/// Which fields a change touches, for the audit log.
fn describe(changes: &EntryChanges) -> String {
    let mut fields = Vec::new();
    if let Some(l) = &changes.new_label {
        fields.push(format!("label -> {l}"));
    }
    if changes.new_plaintext.is_some() {
        fields.push("password".to_string());
    }
    if changes.new_platforms.is_some() {
        fields.push("platforms".to_string());
    }
    fields.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_touched_fields_without_secrets() {
        let changes = EntryChanges {
            new_label: Some("GitHub2".into()),
            new_plaintext: Some("Str0ng!Pass99".into()),
            new_platforms: None,
        };
        let text = describe(&changes);
        assert_eq!(text, "label -> GitHub2, password");
        assert!(!text.contains("Str0ng"));
    }
}
