//! Two-press confirmation for destructive actions.
//!
//! The first [`ConfirmationGate::request`] for a key arms it; a second
//! request for the same key inside the window confirms and disarms it.
//! Keys are independent, so arming one entry never confirms another.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Window between the two presses unless configured otherwise.
pub const DEFAULT_CONFIRM_WINDOW: Duration = Duration::from_millis(500);

/// Per-key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Armed(Instant),
}

/// Proof that a destructive action on `key` was confirmed. Minted only by
/// the gate and consumed by [`VaultStore::delete`](super::VaultStore::delete).
#[derive(Debug)]
pub struct Confirmation {
    key: String,
}

impl Confirmation {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Result of a confirmation request.
#[derive(Debug)]
pub enum ConfirmOutcome {
    Confirmed(Confirmation),
    /// Armed; the caller should ask for a second press.
    AwaitingConfirmation,
}

impl ConfirmOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmOutcome::Confirmed(_))
    }
}

#[derive(Debug)]
pub struct ConfirmationGate {
    window: Duration,
    armed: HashMap<String, Instant>,
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRM_WINDOW)
    }
}

impl ConfirmationGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Register a press for `key` at `now`.
    pub fn request(&mut self, key: &str, now: Instant) -> ConfirmOutcome {
        match self.armed.get(key) {
            Some(at) if now.saturating_duration_since(*at) < self.window => {
                self.armed.remove(key);
                ConfirmOutcome::Confirmed(Confirmation {
                    key: key.to_string(),
                })
            }
            _ => {
                self.armed.insert(key.to_string(), now);
                ConfirmOutcome::AwaitingConfirmation
            }
        }
    }

    /// [`request`](Self::request) at the current instant.
    pub fn request_now(&mut self, key: &str) -> ConfirmOutcome {
        self.request(key, Instant::now())
    }

    pub fn state(&self, key: &str) -> GateState {
        self.armed
            .get(key)
            .map_or(GateState::Idle, |at| GateState::Armed(*at))
    }

    /// Disarm `key` without confirming.
    pub fn reset(&mut self, key: &str) {
        self.armed.remove(key);
    }
}
