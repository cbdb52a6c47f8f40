//! Serialized layout of the entry collection.
//!
//! The whole collection is one JSON document stored under a single key:
//!
//! ```text
//! {"version": 1, "entries": [{"name": ..., "hashedPassword": ..., "expiryDate": ..., "platforms": [...]}, ...]}
//! ```
//!
//! Blobs written before versioning are a bare JSON array of entries; they
//! are read as version 0 and rewritten in the current layout on the next
//! mutation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entry::Entry;
use crate::errors::{CredVaultError, Result};

/// Current document version.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
struct Document {
    version: u32,
    #[serde(default)]
    entries: Vec<Entry>,
}

/// Serialize the collection in the current layout.
pub fn encode(entries: &[Entry]) -> Result<String> {
    let doc = DocumentRef {
        version: CURRENT_VERSION,
        entries,
    };
    serde_json::to_string(&doc)
        .map_err(|e| CredVaultError::InvalidVaultFormat(format!("encode: {e}")))
}

/// Parse a stored blob, accepting both the versioned document and the
/// legacy bare array. An empty blob is an empty collection.
pub fn decode(blob: &str) -> Result<Vec<Entry>> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(blob)
        .map_err(|e| CredVaultError::InvalidVaultFormat(format!("not JSON: {e}")))?;

    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| CredVaultError::InvalidVaultFormat(format!("entries: {e}"))),
        Value::Object(_) => {
            let doc: Document = serde_json::from_value(value)
                .map_err(|e| CredVaultError::InvalidVaultFormat(format!("document: {e}")))?;
            if doc.version > CURRENT_VERSION {
                return Err(CredVaultError::InvalidVaultFormat(format!(
                    "unsupported version {}, expected at most {CURRENT_VERSION}",
                    doc.version
                )));
            }
            Ok(doc.entries)
        }
        _ => Err(CredVaultError::InvalidVaultFormat(
            "expected an array or an object".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Digest;
    use crate::vault::Platforms;

    fn sample() -> Vec<Entry> {
        vec![
            Entry {
                label: "GitHub".into(),
                digest: Digest::from_encoded("aa"),
                expires_at: "2024-03-01T00:00:00Z".parse().unwrap(),
                platforms: Platforms::parse_all(["Custom:GitHub"]).unwrap(),
            },
            Entry {
                label: "Bank".into(),
                digest: Digest::from_encoded("bb"),
                expires_at: "2024-04-01T00:00:00Z".parse().unwrap(),
                platforms: Platforms::new(),
            },
        ]
    }

    #[test]
    fn encoded_document_carries_version_and_order() {
        let blob = encode(&sample()).unwrap();
        let value: Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(value["version"], CURRENT_VERSION);
        assert_eq!(value["entries"][0]["name"], "GitHub");
        assert_eq!(value["entries"][1]["name"], "Bank");
        assert_eq!(decode(&blob).unwrap(), sample());
    }

    #[test]
    fn legacy_array_is_accepted() {
        let blob = r#"[
            {"name":"Mail","hashedPassword":"cc","expiryDate":"2023-12-01T10:00:00.000Z"},
            {"name":"Shop","hashedPassword":"dd","expiryDate":"2023-12-02T10:00:00.000Z","platforms":["Instagram","Custom","Etsy"]}
        ]"#;
        let entries = decode(blob).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].platforms.is_empty());
        // The bare "Custom" checkbox marker is not a platform.
        assert_eq!(entries[1].platforms.len(), 2);
    }

    #[test]
    fn empty_blob_is_empty_collection() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \n").unwrap().is_empty());
    }

    #[test]
    fn newer_version_is_rejected() {
        let blob = r#"{"version": 99, "entries": []}"#;
        assert!(matches!(
            decode(blob),
            Err(CredVaultError::InvalidVaultFormat(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode("not json").is_err());
        assert!(decode("42").is_err());
        assert!(decode(r#"[{"name": "no digest"}]"#).is_err());
    }
}
