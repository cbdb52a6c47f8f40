use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{CredVaultError, Result};

/// Project-level configuration, loaded from `.credvault.toml`.
///
/// Every field has a sensible default so CredVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) where the vault blob is stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// Name of the record holding the whole entry collection.
    #[serde(default = "default_collection_key")]
    pub collection_key: String,

    /// Days an entry stays valid after creation (default: 60).
    #[serde(default = "default_validity_days")]
    pub validity_days: u32,

    /// Double-press window guarding deletes, in milliseconds (default: 500).
    #[serde(default = "default_confirm_window_ms")]
    pub confirm_window_ms: u64,

    /// How long an interactive delete prompt may wait, in seconds (default: 30).
    #[serde(default = "default_prompt_confirm_secs")]
    pub prompt_confirm_secs: u64,

    /// Minimum strength level (0-4) a new password must reach (default: 2).
    #[serde(default = "default_min_strength")]
    pub min_strength: u8,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".credvault".to_string()
}

fn default_collection_key() -> String {
    "passwords".to_string()
}

fn default_validity_days() -> u32 {
    60
}

fn default_confirm_window_ms() -> u64 {
    500
}

fn default_prompt_confirm_secs() -> u64 {
    30
}

fn default_min_strength() -> u8 {
    2
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            collection_key: default_collection_key(),
            validity_days: default_validity_days(),
            confirm_window_ms: default_confirm_window_ms(),
            prompt_confirm_secs: default_prompt_confirm_secs(),
            min_strength: default_min_strength(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".credvault.toml";

    /// Load settings from `<project_dir>/.credvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed or holds out-of-range
    /// values, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CredVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.validity_days == 0 {
            return Err(CredVaultError::ConfigError(
                "validity_days must be at least 1".into(),
            ));
        }
        if self.min_strength > 4 {
            return Err(CredVaultError::ConfigError(format!(
                "min_strength must be between 0 and 4, got {}",
                self.min_strength
            )));
        }
        if self.collection_key.trim().is_empty() {
            return Err(CredVaultError::ConfigError(
                "collection_key cannot be empty".into(),
            ));
        }
        // A zero window can never confirm a delete.
        if self.confirm_window_ms == 0 {
            return Err(CredVaultError::ConfigError(
                "confirm_window_ms must be at least 1".into(),
            ));
        }
        if self.prompt_confirm_secs == 0 {
            return Err(CredVaultError::ConfigError(
                "prompt_confirm_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Full path of the directory holding the vault blob.
    ///
    /// Example: `project_dir/.credvault`
    pub fn vault_dir_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir)
    }

    /// The delete double-press window.
    pub fn confirm_window(&self) -> Duration {
        Duration::from_millis(self.confirm_window_ms)
    }

    /// The window an interactive delete prompt is allowed to take.
    pub fn prompt_confirm_window(&self) -> Duration {
        Duration::from_secs(self.prompt_confirm_secs)
    }

    /// Expiry policy built from `validity_days`.
    pub fn expiry_policy(&self) -> crate::vault::ExpiryPolicy {
        crate::vault::ExpiryPolicy::new(self.validity_days)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
