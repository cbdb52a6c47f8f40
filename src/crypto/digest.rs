//! One-way digests of credential plaintexts.
//!
//! The vault never stores a plaintext. Every credential is reduced to a
//! lowercase hex SHA-256 digest before it touches the collection, and
//! verification compares digests in constant time.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use subtle::ConstantTimeEq;

use crate::errors::Result;

/// Opaque digest of a credential, stored as an encoded string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Wrap an already-encoded digest (e.g. read back from storage).
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded digest text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time equality, for comparisons against attacker-chosen input.
    pub fn ct_eq(&self, other: &Digest) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

// Digests are not secrets, but there is no reason to splash them into logs.
impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(8).collect();
        write!(f, "Digest({prefix}…)")
    }
}

/// Deterministic one-way function from plaintext to [`Digest`].
pub trait DigestProvider: Send + Sync {
    /// Digest `text`. Equal inputs always produce equal outputs.
    fn digest(&self, text: &str) -> Result<Digest>;
}

/// SHA-256 over the trimmed plaintext, hex encoded.
///
/// Surrounding whitespace is not part of the credential, so `" hunter2 "`
/// and `"hunter2"` digest identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl DigestProvider for Sha256Digest {
    fn digest(&self, text: &str) -> Result<Digest> {
        let hash = Sha256::digest(text.trim().as_bytes());
        Ok(Digest(hex::encode(hash)))
    }
}
