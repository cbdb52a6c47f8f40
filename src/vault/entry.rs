//! Entry, Platform and Platforms types stored inside a vault.
//!
//! Field names on disk follow the original collection layout
//! (`name`, `hashedPassword`, `expiryDate`, `platforms`) so existing
//! vault blobs keep loading.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::Digest;
use crate::errors::CredVaultError;

/// A single stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// User-chosen label (e.g. "GitHub").
    #[serde(rename = "name")]
    pub label: String,

    /// Digest of the credential; never the plaintext.
    #[serde(rename = "hashedPassword")]
    pub digest: Digest,

    /// Fixed at creation; updates leave it alone.
    #[serde(rename = "expiryDate")]
    pub expires_at: DateTime<Utc>,

    /// Platforms this credential is used on. Absent in older blobs.
    #[serde(default)]
    pub platforms: Platforms,
}

impl Entry {
    /// `true` if this entry and `other` are the same credential under the
    /// same label (the collection's uniqueness key).
    pub fn same_identity(&self, label: &str, digest: &Digest) -> bool {
        self.label == label && &self.digest == digest
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Prefix marking a free-form platform tag in its textual form.
const CUSTOM_PREFIX: &str = "Custom:";

/// Checkbox marker older blobs store next to the bare custom name. It
/// carries no platform of its own.
const LEGACY_CUSTOM_MARKER: &str = "Custom";

/// Where a credential is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    YouTube,
    Twitter,
    Facebook,
    Instagram,
    Snapchat,
    /// Any platform outside the fixed set.
    Custom(String),
}

impl Platform {
    /// The fixed platforms, in display order.
    pub const KNOWN: [Platform; 5] = [
        Platform::YouTube,
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Snapchat,
    ];

    fn known_name(&self) -> Option<&'static str> {
        match self {
            Platform::YouTube => Some("YouTube"),
            Platform::Twitter => Some("Twitter"),
            Platform::Facebook => Some("Facebook"),
            Platform::Instagram => Some("Instagram"),
            Platform::Snapchat => Some("Snapchat"),
            Platform::Custom(_) => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Custom(name) => write!(f, "{CUSTOM_PREFIX}{name}"),
            known => f.write_str(known.known_name().unwrap_or_default()),
        }
    }
}

impl FromStr for Platform {
    type Err = CredVaultError;

    /// Known names match case-insensitively. `Custom:<name>` and any other
    /// text become a custom tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let custom = s.strip_prefix(CUSTOM_PREFIX).map(str::trim);

        if let Some(name) = custom {
            if name.is_empty() {
                return Err(CredVaultError::Validation(
                    "custom platform name cannot be empty".into(),
                ));
            }
            return Ok(Platform::Custom(name.to_string()));
        }

        if s.is_empty() {
            return Err(CredVaultError::Validation(
                "platform name cannot be empty".into(),
            ));
        }

        let known = Platform::KNOWN
            .into_iter()
            .find(|p| p.known_name().is_some_and(|n| n.eq_ignore_ascii_case(s)));

        Ok(known.unwrap_or_else(|| Platform::Custom(s.to_string())))
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Platforms
// ---------------------------------------------------------------------------

/// Set of platform tags. Order is irrelevant and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Platforms(BTreeSet<Platform>);

impl<'de> Deserialize<'de> for Platforms {
    /// Reads a sequence of tag strings, skipping the bare legacy marker.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tags = Vec::<String>::deserialize(deserializer)?;
        tags.iter()
            .filter(|t| t.trim() != LEGACY_CUSTOM_MARKER)
            .map(|t| t.parse::<Platform>().map_err(serde::de::Error::custom))
            .collect()
    }
}

impl Platforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every tag, failing on the first empty one.
    pub fn parse_all<I, S>(tags: I) -> crate::errors::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().map(|t| t.as_ref().parse()).collect()
    }

    /// Add a tag; returns `false` if it was already present.
    pub fn insert(&mut self, platform: Platform) -> bool {
        self.0.insert(platform)
    }

    pub fn contains(&self, platform: &Platform) -> bool {
        self.0.contains(platform)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Platform> for Platforms {
    fn from_iter<T: IntoIterator<Item = Platform>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Platforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&names.join(", "))
    }
}
