//! CredVault: a local credential vault.
//!
//! Labelled passwords are stored as one-way digests with a fixed expiry
//! window. Changing an entry requires re-entering its password, and
//! deleting one requires a second confirming press.

#[cfg(feature = "audit-log")]
pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod vault;
