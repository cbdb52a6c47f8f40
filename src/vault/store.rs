//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the entry collection. Every operation reads the whole
//! collection from the backing store; every mutation applies its change
//! in memory and writes the whole collection back. Nothing is cached
//! between calls, so a failed write leaves the previously persisted
//! collection as the only truth.
//!
//! Mutations take `&mut self` and reads take `&self`: one writer at a
//! time, with reads working on their own freshly loaded snapshot. To share
//! a store across threads, wrap it in a `RwLock`.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::crypto::{DigestProvider, Sha256Digest};
use crate::errors::{CredVaultError, Result};

use super::auth::{AuthenticationGate, Grant, Verification};
use super::backend::BlobStore;
use super::confirm::Confirmation;
use super::entry::{Entry, Platforms};
use super::expiry::{self, ExpiryPolicy};
use super::{format, search};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_COLLECTION_KEY: &str = "passwords";

/// Requested changes for [`VaultStore::update`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub new_label: Option<String>,
    /// Ignored when empty; the existing digest is kept.
    pub new_plaintext: Option<String>,
    pub new_platforms: Option<Platforms>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.new_label.is_none() && self.new_plaintext.is_none() && self.new_platforms.is_none()
    }
}

/// The main vault handle.
pub struct VaultStore<B: BlobStore> {
    /// Backing medium holding the serialized collection.
    backend: B,

    /// Name of the record the collection lives under.
    collection_key: String,

    /// Turns plaintexts into stored digests.
    digest: Box<dyn DigestProvider>,

    expiry: ExpiryPolicy,
}

impl<B: BlobStore> VaultStore<B> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// A store over `backend` with the default key, SHA-256 digests and a
    /// 60-day expiry window. Nothing is read until the first operation.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
            digest: Box::new(Sha256Digest),
            expiry: ExpiryPolicy::default(),
        }
    }

    /// A store configured from project settings.
    pub fn from_settings(backend: B, settings: &Settings) -> Self {
        Self::new(backend)
            .with_collection_key(&settings.collection_key)
            .with_expiry_policy(settings.expiry_policy())
    }

    pub fn with_collection_key(mut self, key: &str) -> Self {
        self.collection_key = key.to_string();
        self
    }

    pub fn with_digest_provider(mut self, provider: impl DigestProvider + 'static) -> Self {
        self.digest = Box::new(provider);
        self
    }

    pub fn with_expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry = policy;
        self
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add a credential, expiring one validity window from now.
    pub fn create(&mut self, label: &str, plaintext: &str, platforms: Platforms) -> Result<Entry> {
        self.create_at(label, plaintext, platforms, Utc::now())
    }

    /// Add a credential as if created at `now`.
    ///
    /// Fails with `DuplicateEntry` if an entry with the same label and the
    /// same digest already exists; the collection is left untouched.
    pub fn create_at(
        &mut self,
        label: &str,
        plaintext: &str,
        platforms: Platforms,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        let label = Self::validate_label(label)?;
        if plaintext.trim().is_empty() {
            return Err(CredVaultError::Validation("password cannot be empty".into()));
        }

        let digest = self.digest.digest(plaintext)?;
        let mut entries = self.load()?;

        if entries.iter().any(|e| e.same_identity(label, &digest)) {
            warn!(label, "rejected duplicate entry");
            return Err(CredVaultError::DuplicateEntry(label.to_string()));
        }

        let entry = Entry {
            label: label.to_string(),
            digest,
            expires_at: self.expiry.compute_expiry(now),
            platforms,
        };
        entries.push(entry.clone());
        self.persist(&entries)?;

        info!(label, expires_at = %entry.expires_at, "created entry");
        Ok(entry)
    }

    /// Apply `changes` to the entry covered by `grant`.
    ///
    /// The digest is recomputed only for a non-empty new password. The
    /// expiry instant never changes. A grant for a different entry, or one
    /// issued before the entry's password changed, is `AuthenticationDenied`.
    pub fn update(&mut self, grant: &Grant, changes: EntryChanges) -> Result<Entry> {
        let mut entries = self.load()?;

        if !entries.iter().any(|e| e.label == grant.label()) {
            return Err(CredVaultError::NotFound(grant.label().to_string()));
        }
        let idx = entries
            .iter()
            .position(|e| grant.covers(e))
            .ok_or_else(|| {
                warn!(label = grant.label(), "update with stale grant");
                CredVaultError::AuthenticationDenied
            })?;

        let mut updated = entries[idx].clone();
        if let Some(new_label) = &changes.new_label {
            updated.label = Self::validate_label(new_label)?.to_string();
        }
        if let Some(plaintext) = changes.new_plaintext.as_deref() {
            if !plaintext.trim().is_empty() {
                updated.digest = self.digest.digest(plaintext)?;
            }
        }
        if let Some(platforms) = changes.new_platforms {
            updated.platforms = platforms;
        }

        let collides = entries
            .iter()
            .enumerate()
            .any(|(i, e)| i != idx && e.same_identity(&updated.label, &updated.digest));
        if collides {
            warn!(label = %updated.label, "update would duplicate an entry");
            return Err(CredVaultError::DuplicateEntry(updated.label));
        }

        entries[idx] = updated.clone();
        self.persist(&entries)?;

        info!(from = grant.label(), to = %updated.label, "updated entry");
        Ok(updated)
    }

    /// Remove the entry covered by `grant`, once the user has confirmed the
    /// delete. Other entries sharing the label are left alone.
    ///
    /// A confirmation for a different label, or a stale grant, is
    /// `AuthenticationDenied`.
    pub fn delete(&mut self, grant: &Grant, confirmation: Confirmation) -> Result<Entry> {
        if confirmation.key() != grant.label() {
            warn!(
                label = grant.label(),
                confirmed = confirmation.key(),
                "confirmation does not match grant"
            );
            return Err(CredVaultError::AuthenticationDenied);
        }

        let mut entries = self.load()?;

        if !entries.iter().any(|e| e.label == grant.label()) {
            return Err(CredVaultError::NotFound(grant.label().to_string()));
        }
        let idx = entries
            .iter()
            .position(|e| grant.covers(e))
            .ok_or_else(|| {
                warn!(label = grant.label(), "delete with stale grant");
                CredVaultError::AuthenticationDenied
            })?;

        let removed = entries.remove(idx);
        self.persist(&entries)?;

        info!(label = %removed.label, "deleted entry");
        Ok(removed)
    }

    /// Drop the whole collection. Callers confirm with the user first.
    pub fn clear_all(&mut self) -> Result<()> {
        self.backend
            .remove(&self.collection_key)
            .map_err(|e| self.storage_failure("remove", &e))?;
        info!(key = %self.collection_key, "cleared vault");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All entries, oldest first.
    pub fn list(&self) -> Result<Vec<Entry>> {
        self.load()
    }

    /// First entry whose label matches exactly.
    pub fn find(&self, label: &str) -> Result<Entry> {
        self.load()?
            .into_iter()
            .find(|e| e.label == label)
            .ok_or_else(|| CredVaultError::NotFound(label.to_string()))
    }

    /// Case-insensitive label search; an empty query matches nothing.
    pub fn search(&self, query: &str) -> Result<Vec<Entry>> {
        Ok(search::filter(&self.load()?, query))
    }

    /// Entries whose expiry instant lies before `as_of`, in collection order.
    pub fn list_expired(&self, as_of: DateTime<Utc>) -> Result<Vec<Entry>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| expiry::is_expired(e, as_of))
            .collect())
    }

    /// Check `presented` against the entries labelled `label` and, on a
    /// match, grant the right to modify that entry.
    pub fn authenticate(&self, label: &str, presented: &str) -> Result<Verification> {
        let entries = self.load()?;
        let gate = AuthenticationGate::new(self.digest.as_ref());

        let mut candidates = entries.iter().filter(|e| e.label == label).peekable();
        if candidates.peek().is_none() {
            return Err(CredVaultError::NotFound(label.to_string()));
        }

        for entry in candidates {
            if let Verification::Authenticated(grant) = gate.verify(entry, presented)? {
                return Ok(Verification::Authenticated(grant));
            }
        }
        Ok(Verification::Denied)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn collection_key(&self) -> &str {
        &self.collection_key
    }

    pub fn expiry_policy(&self) -> ExpiryPolicy {
        self.expiry
    }

    /// The digest function in use, e.g. to build an [`AuthenticationGate`].
    pub fn digest_provider(&self) -> &dyn DigestProvider {
        self.digest.as_ref()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    fn load(&self) -> Result<Vec<Entry>> {
        let blob = self
            .backend
            .get(&self.collection_key)
            .map_err(|e| self.storage_failure("read", &e))?;

        match blob {
            Some(blob) => {
                let entries = format::decode(&blob)?;
                debug!(count = entries.len(), "loaded collection");
                Ok(entries)
            }
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, entries: &[Entry]) -> Result<()> {
        let blob = format::encode(entries)?;
        self.backend
            .set(&self.collection_key, &blob)
            .map_err(|e| self.storage_failure("write", &e))?;
        debug!(count = entries.len(), "persisted collection");
        Ok(())
    }

    fn storage_failure(&self, op: &str, err: &std::io::Error) -> CredVaultError {
        warn!(key = %self.collection_key, op, error = %err, "backing store failed");
        CredVaultError::storage(op, err)
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Trimmed label, rejected if empty.
    fn validate_label(label: &str) -> Result<&str> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(CredVaultError::Validation("label cannot be empty".into()));
        }
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::backend::MemoryBlobStore;
    use crate::vault::confirm::{ConfirmOutcome, ConfirmationGate};
    use std::time::Instant;

    fn store() -> VaultStore<MemoryBlobStore> {
        VaultStore::new(MemoryBlobStore::new())
    }

    #[test]
    fn create_trims_label_and_never_stores_plaintext() {
        let mut vault = store();
        let entry = vault.create("  GitHub ", "Str0ng!Pass99", Platforms::new()).unwrap();
        assert_eq!(entry.label, "GitHub");
        assert_ne!(entry.digest.as_str(), "Str0ng!Pass99");

        let blob = vault.backend().get("passwords").unwrap().unwrap();
        assert!(!blob.contains("Str0ng!Pass99"));
    }

    #[test]
    fn same_label_with_different_password_is_allowed() {
        let mut vault = store();
        vault.create("Mail", "first-Pass1", Platforms::new()).unwrap();
        vault.create("Mail", "second-Pass2", Platforms::new()).unwrap();
        assert_eq!(vault.list().unwrap().len(), 2);
    }

    #[test]
    fn authenticate_picks_the_matching_entry_among_same_labels() {
        let mut vault = store();
        vault.create("Mail", "first-Pass1", Platforms::new()).unwrap();
        let second = vault.create("Mail", "second-Pass2", Platforms::new()).unwrap();

        let grant = vault
            .authenticate("Mail", "second-Pass2")
            .unwrap()
            .into_grant()
            .unwrap();
        assert!(grant.covers(&second));
    }

    #[test]
    fn authenticate_unknown_label_is_not_found() {
        let vault = store();
        assert!(matches!(
            vault.authenticate("nope", "x"),
            Err(CredVaultError::NotFound(_))
        ));
    }

    #[test]
    fn update_into_existing_identity_is_duplicate() {
        let mut vault = store();
        vault.create("A", "shared-Pass1", Platforms::new()).unwrap();
        vault.create("B", "shared-Pass1", Platforms::new()).unwrap();

        let grant = vault.authenticate("B", "shared-Pass1").unwrap().into_grant().unwrap();
        let changes = EntryChanges {
            new_label: Some("A".into()),
            ..EntryChanges::default()
        };
        assert!(matches!(
            vault.update(&grant, changes),
            Err(CredVaultError::DuplicateEntry(_))
        ));
        assert!(vault.find("B").is_ok());
    }

    fn confirm(key: &str) -> Confirmation {
        let mut gate = ConfirmationGate::default();
        let t0 = Instant::now();
        gate.request(key, t0);
        match gate.request(key, t0) {
            ConfirmOutcome::Confirmed(c) => c,
            ConfirmOutcome::AwaitingConfirmation => panic!("expected confirmation"),
        }
    }

    #[test]
    fn delete_removes_only_the_granted_entry() {
        let mut vault = store();
        vault.create("Mail", "first-Pass1", Platforms::new()).unwrap();
        let second = vault.create("Mail", "second-Pass2", Platforms::new()).unwrap();
        vault.create("Bank", "third-Pass3", Platforms::new()).unwrap();

        let grant = vault.authenticate("Mail", "first-Pass1").unwrap().into_grant().unwrap();
        let removed = vault.delete(&grant, confirm("Mail")).unwrap();
        assert_eq!(removed.label, "Mail");

        let left = vault.list().unwrap();
        assert_eq!(left.len(), 2);
        assert!(left.contains(&second));
    }

    #[test]
    fn delete_rejects_confirmation_for_another_label() {
        let mut vault = store();
        vault.create("Mail", "first-Pass1", Platforms::new()).unwrap();
        vault.create("Bank", "third-Pass3", Platforms::new()).unwrap();

        let grant = vault.authenticate("Mail", "first-Pass1").unwrap().into_grant().unwrap();
        assert!(matches!(
            vault.delete(&grant, confirm("Bank")),
            Err(CredVaultError::AuthenticationDenied)
        ));
        assert_eq!(vault.list().unwrap().len(), 2);
    }

    #[test]
    fn custom_collection_key_and_policy() {
        let mut vault = store()
            .with_collection_key("creds")
            .with_expiry_policy(ExpiryPolicy::new(1));
        let now = Utc::now();
        let entry = vault.create_at("X", "Abcdefg1!", Platforms::new(), now).unwrap();
        assert_eq!(entry.expires_at, now + chrono::Duration::days(1));
        assert!(vault.backend().get("creds").unwrap().is_some());
        assert!(vault.backend().get("passwords").unwrap().is_none());
    }
}
