//! Per-entry re-authentication.
//!
//! Changing an entry requires proving knowledge of its current password.
//! A successful [`AuthenticationGate::verify`] yields a [`Grant`] scoped to
//! exactly that entry; the grant is the only way to call
//! [`VaultStore::update`](super::VaultStore::update) or
//! [`VaultStore::delete`](super::VaultStore::delete).

use tracing::warn;

use crate::crypto::{Digest, DigestProvider};
use crate::errors::{CredVaultError, Result};

use super::entry::Entry;

/// Capability to modify one entry, identified by its label and the digest
/// it had when verified. Only this module can mint one.
#[derive(Debug)]
pub struct Grant {
    label: String,
    digest: Digest,
}

impl Grant {
    /// Label of the entry this grant covers.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// `true` if `entry` is the entry this grant was issued for, unchanged.
    pub(crate) fn covers(&self, entry: &Entry) -> bool {
        entry.label == self.label && entry.digest.ct_eq(&self.digest)
    }
}

/// Outcome of presenting a password for an entry.
#[derive(Debug)]
pub enum Verification {
    Authenticated(Grant),
    Denied,
}

impl Verification {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Verification::Authenticated(_))
    }

    /// Turn a denial into [`CredVaultError::AuthenticationDenied`].
    pub fn into_grant(self) -> Result<Grant> {
        match self {
            Verification::Authenticated(grant) => Ok(grant),
            Verification::Denied => Err(CredVaultError::AuthenticationDenied),
        }
    }
}

/// Checks presented passwords against stored digests. Holds no state.
pub struct AuthenticationGate<'a> {
    provider: &'a dyn DigestProvider,
}

impl<'a> AuthenticationGate<'a> {
    pub fn new(provider: &'a dyn DigestProvider) -> Self {
        Self { provider }
    }

    /// Digest `presented` and compare it to `entry.digest` in constant time.
    pub fn verify(&self, entry: &Entry, presented: &str) -> Result<Verification> {
        let candidate = self.provider.digest(presented)?;

        if candidate.ct_eq(&entry.digest) {
            Ok(Verification::Authenticated(Grant {
                label: entry.label.clone(),
                digest: entry.digest.clone(),
            }))
        } else {
            warn!(label = %entry.label, "authentication denied");
            Ok(Verification::Denied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Sha256Digest;
    use crate::vault::Platforms;
    use chrono::Utc;

    fn entry(label: &str, password: &str) -> Entry {
        Entry {
            label: label.into(),
            digest: Sha256Digest.digest(password).unwrap(),
            expires_at: Utc::now(),
            platforms: Platforms::new(),
        }
    }

    #[test]
    fn correct_password_authenticates() {
        let e = entry("GitHub", "Str0ng!Pass99");
        let gate = AuthenticationGate::new(&Sha256Digest);
        let grant = gate.verify(&e, "Str0ng!Pass99").unwrap().into_grant().unwrap();
        assert_eq!(grant.label(), "GitHub");
        assert!(grant.covers(&e));
    }

    #[test]
    fn wrong_password_is_denied() {
        let e = entry("GitHub", "Str0ng!Pass99");
        let gate = AuthenticationGate::new(&Sha256Digest);
        let outcome = gate.verify(&e, "guess").unwrap();
        assert!(!outcome.is_authenticated());
        assert!(matches!(
            outcome.into_grant(),
            Err(CredVaultError::AuthenticationDenied)
        ));
    }

    #[test]
    fn grant_does_not_cover_other_entries() {
        let a = entry("GitHub", "same-password");
        let b = entry("GitLab", "same-password");
        let gate = AuthenticationGate::new(&Sha256Digest);
        let grant = gate.verify(&a, "same-password").unwrap().into_grant().unwrap();
        assert!(!grant.covers(&b));
    }

    #[test]
    fn grant_goes_stale_when_digest_changes() {
        let mut e = entry("GitHub", "old-password");
        let gate = AuthenticationGate::new(&Sha256Digest);
        let grant = gate.verify(&e, "old-password").unwrap().into_grant().unwrap();
        e.digest = Sha256Digest.digest("new-password").unwrap();
        assert!(!grant.covers(&e));
    }
}
