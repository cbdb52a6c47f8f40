//! Create-flow checks that happen before anything reaches the store.
//!
//! Dual entry of the password and the strength threshold belong to the
//! caller, not to [`VaultStore`](super::VaultStore): neither the
//! confirmation nor the score is ever persisted.

use crate::crypto::{Strength, StrengthScorer};
use crate::errors::{CredVaultError, Result};

use super::entry::Platforms;

/// Everything the user typed into the "add password" form.
#[derive(Debug, Clone)]
pub struct CreateRequest<'a> {
    pub label: &'a str,
    pub plaintext: &'a str,
    pub confirmation: &'a str,
    pub platforms: Platforms,
}

impl CreateRequest<'_> {
    /// Reject empty fields, a mismatched confirmation, or a password that
    /// scores below `min_level`. Returns the score on success so the caller
    /// can show it.
    pub fn validate(&self, scorer: &dyn StrengthScorer, min_level: u8) -> Result<Strength> {
        if self.label.trim().is_empty() {
            return Err(CredVaultError::Validation("label cannot be empty".into()));
        }
        if self.plaintext.trim().is_empty() {
            return Err(CredVaultError::Validation("password cannot be empty".into()));
        }
        if self.plaintext != self.confirmation {
            return Err(CredVaultError::Validation(
                "password and confirmation do not match".into(),
            ));
        }

        let strength = scorer.score(self.plaintext);
        if strength.level < min_level {
            let mut msg = format!(
                "password is too weak ({}, level {} of 4; need at least {min_level})",
                strength.label(),
                strength.level
            );
            for hint in &strength.suggestions {
                msg.push_str("\n  - ");
                msg.push_str(hint);
            }
            return Err(CredVaultError::Validation(msg));
        }

        Ok(strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ZxcvbnScorer;

    fn request<'a>(label: &'a str, plaintext: &'a str, confirmation: &'a str) -> CreateRequest<'a> {
        CreateRequest {
            label,
            plaintext,
            confirmation,
            platforms: Platforms::new(),
        }
    }

    #[test]
    fn strong_matching_password_passes() {
        let strength = request("GitHub", "Str0ng!Pass99", "Str0ng!Pass99")
            .validate(&ZxcvbnScorer, 2)
            .unwrap();
        assert!(strength.level >= 2);
    }

    #[test]
    fn blank_label_or_password_is_rejected() {
        for req in [request("  ", "Str0ng!Pass99", "Str0ng!Pass99"), request("GitHub", " ", " ")] {
            assert!(matches!(
                req.validate(&ZxcvbnScorer, 0),
                Err(CredVaultError::Validation(_))
            ));
        }
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let err = request("GitHub", "Str0ng!Pass99", "Str0ng!Pass98")
            .validate(&ZxcvbnScorer, 0)
            .unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn weak_password_is_rejected_with_suggestions() {
        let err = request("GitHub", "password", "password")
            .validate(&ZxcvbnScorer, 2)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too weak"));
        assert!(msg.contains("  - "));
    }

    #[test]
    fn decorated_dictionary_word_is_too_weak() {
        let err = request("Mail", "Password1!", "Password1!")
            .validate(&ZxcvbnScorer, 2)
            .unwrap_err();
        assert!(matches!(err, CredVaultError::Validation(_)));
        assert!(err.to_string().contains("too weak"));
    }
}
