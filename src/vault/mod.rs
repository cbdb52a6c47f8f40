//! Vault module: the credential storage engine.
//!
//! This module provides:
//! - `Entry`, `Platform` and `Platforms` types (`entry`)
//! - The fixed validity window (`expiry`)
//! - Case-insensitive label search (`search`)
//! - Per-entry re-authentication (`auth`)
//! - Two-press delete confirmation (`confirm`)
//! - Create-flow validation (`create`)
//! - The serialized collection layout (`format`)
//! - Backing blob stores (`backend`)
//! - High-level `VaultStore` owning the collection (`store`)

pub mod auth;
pub mod backend;
pub mod confirm;
pub mod create;
pub mod entry;
pub mod expiry;
pub mod format;
pub mod search;
pub mod store;

// Re-export the most commonly used items.
pub use auth::{AuthenticationGate, Grant, Verification};
pub use backend::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use confirm::{
    ConfirmOutcome, Confirmation, ConfirmationGate, GateState, DEFAULT_CONFIRM_WINDOW,
};
pub use create::CreateRequest;
pub use entry::{Entry, Platform, Platforms};
pub use expiry::{is_expired, ExpiryPolicy, DEFAULT_VALIDITY_DAYS};
pub use store::{EntryChanges, VaultStore, DEFAULT_COLLECTION_KEY};
