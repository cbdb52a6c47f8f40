//! Rolling validity window for entries.

use chrono::{DateTime, Days, Utc};

use super::entry::Entry;

/// Days an entry stays valid unless configured otherwise.
pub const DEFAULT_VALIDITY_DAYS: u32 = 60;

/// Computes when an entry expires. Pure; holds only the window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    validity_days: u32,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDITY_DAYS)
    }
}

impl ExpiryPolicy {
    pub fn new(validity_days: u32) -> Self {
        Self { validity_days }
    }

    pub fn validity_days(&self) -> u32 {
        self.validity_days
    }

    /// `created_at` plus the window, using calendar-day addition.
    /// Saturates at the latest representable instant.
    pub fn compute_expiry(&self, created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at
            .checked_add_days(Days::new(u64::from(self.validity_days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// An entry is expired strictly after its expiry instant.
pub fn is_expired(entry: &Entry, as_of: DateTime<Utc>) -> bool {
    as_of > entry.expires_at
}
