//! Credential digests and strength scoring.
//!
//! This module provides:
//! - The `DigestProvider` seam and its SHA-256 implementation (`digest`)
//! - The `StrengthScorer` seam backed by `zxcvbn` (`strength`)

pub mod digest;
pub mod strength;

pub use digest::{Digest, DigestProvider, Sha256Digest};
pub use strength::{Strength, StrengthScorer, ZxcvbnScorer};
