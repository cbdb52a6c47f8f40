//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{CredVaultError, Result};
use crate::vault::{FileBlobStore, Platforms, VaultStore};

/// Env var holding the password for scripted use (add/verify/edit/delete).
pub const SECRET_ENV: &str = "CREDVAULT_SECRET";

/// Env var holding the replacement password for scripted `edit`.
pub const NEW_SECRET_ENV: &str = "CREDVAULT_NEW_SECRET";

/// CredVault CLI: local credential vault.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "Local credential vault with digests and expiry tracking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: from .credvault.toml, else .credvault)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Store a new password entry
    Add {
        /// Entry label (e.g. GitHub)
        label: String,
        /// Platform tag; repeatable (YouTube, Twitter, Facebook, Instagram,
        /// Snapchat, or any custom name)
        #[arg(short, long = "platform")]
        platforms: Vec<String>,
    },

    /// List all entries with their expiry status
    List,

    /// Show one entry
    Show {
        /// Entry label (exact match)
        label: String,
    },

    /// Search entries by label (case-insensitive substring)
    Search {
        /// Text to look for
        query: String,
    },

    /// List entries past their expiry date
    Expired,

    /// Check a password against a stored entry
    Verify {
        /// Entry label
        label: String,
    },

    /// Change an entry's label, password, or platforms (verifies first)
    Edit {
        /// Current entry label
        label: String,
        /// New label
        #[arg(long = "label", value_name = "NEW_LABEL")]
        new_label: Option<String>,
        /// Prompt for a new password
        #[arg(long)]
        new_password: bool,
        /// Replace platforms with these tags; repeatable
        #[arg(short, long = "platform")]
        platforms: Vec<String>,
        /// Remove all platform tags
        #[arg(long, conflicts_with = "platforms")]
        clear_platforms: bool,
    },

    /// Delete an entry (verifies, then asks to confirm)
    Delete {
        /// Entry label
        label: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Remove every stored entry
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },

    /// View the audit log of vault operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

impl Cli {
    /// Settings from `.credvault.toml` in the working directory.
    pub fn settings(&self) -> Result<Settings> {
        let cwd = std::env::current_dir()?;
        let mut settings = Settings::load(&cwd)?;
        if let Some(dir) = &self.vault_dir {
            settings.vault_dir = dir.clone();
        }
        Ok(settings)
    }

    /// Full path of the vault directory.
    ///
    /// Example: `<cwd>/.credvault`
    pub fn vault_dir_path(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(self.settings()?.vault_dir_path(&cwd))
    }
}

/// Open the file-backed vault described by the CLI arguments and settings.
pub fn open_store(cli: &Cli) -> Result<(Settings, VaultStore<FileBlobStore>)> {
    let settings = cli.settings()?;
    let cwd = std::env::current_dir()?;
    let backend = FileBlobStore::new(settings.vault_dir_path(&cwd));
    let store = VaultStore::from_settings(backend, &settings);
    Ok((settings, store))
}

/// Get a password, trying in order:
/// 1. the `env_var` environment variable (CI/scripts)
/// 2. one line of piped stdin
/// 3. an interactive prompt, with a confirmation prompt if `confirm` is set
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn read_secret(env_var: &str, prompt: &str, confirm: bool) -> Result<Zeroizing<String>> {
    // 1. Check the environment variable first.
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // 2. Piped input (stdin is not a terminal).
    if !io::stdin().is_terminal() {
        let mut line = Zeroizing::new(String::new());
        io::stdin().read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        return Ok(Zeroizing::new(trimmed.to_string()));
    }

    // 3. Fall back to interactive prompt.
    let mut input = dialoguer::Password::new().with_prompt(prompt);
    if confirm {
        input = input.with_confirmation("Retype password", "Passwords do not match, try again");
    }
    let pw = input
        .interact()
        .map_err(|e| CredVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Record a mutation in the audit log, if compiled in. Never fails.
pub fn record_audit(cli: &Cli, op: &str, label: Option<&str>, details: Option<&str>) {
    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(cli, op, label, details);

    #[cfg(not(feature = "audit-log"))]
    let _ = (cli, op, label, details);
}

/// Parse `--platform` arguments into a tag set.
pub fn parse_platforms(raw: &[String]) -> Result<Platforms> {
    Platforms::parse_all(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::Platform;

    #[test]
    fn cli_parses_add_with_platforms() {
        let cli = Cli::try_parse_from([
            "credvault", "add", "GitHub", "-p", "Custom:GitHub", "--platform", "youtube",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { label, platforms } => {
                assert_eq!(label, "GitHub");
                let set = parse_platforms(&platforms).unwrap();
                assert!(set.contains(&Platform::YouTube));
                assert!(set.contains(&Platform::Custom("GitHub".into())));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn cli_edit_rejects_platforms_with_clear() {
        let result = Cli::try_parse_from([
            "credvault", "edit", "GitHub", "-p", "Twitter", "--clear-platforms",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_global_vault_dir() {
        let cli = Cli::try_parse_from(["credvault", "list", "--vault-dir", "secrets"]).unwrap();
        assert_eq!(cli.vault_dir.as_deref(), Some("secrets"));
    }

    #[test]
    fn parse_platforms_rejects_empty_tag() {
        assert!(parse_platforms(&[String::new()]).is_err());
    }
}
