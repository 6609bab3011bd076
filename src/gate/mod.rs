//! Permit/deny gating of outbound network calls.
//!
//! This module provides:
//! - The shared permit/deny switch ([`RequestGate`])
//! - Scoped overrides with guaranteed restoration ([`AllowGuard`])
//! - A transport decorator enforcing the gate ([`GatedTransport`])

mod transport;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;


pub use transport::{GatedError, GatedTransport};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shared switch deciding whether outbound network calls may happen.
///
/// A test run constructs one gate (typically inside an `Arc`) and hands it
/// to every [`GatedTransport`]. Suites that must not touch the network
/// call [`Self::block`]; individual tests that genuinely need live access
/// open a scoped override with [`Self::allowing_requests`].
///
/// Created open: requests are allowed until [`Self::block`] is called.
#[derive(Debug)]
pub struct RequestGate {
    allowed: Mutex<bool>,
}

impl RequestGate {
    /// Creates a gate with requests allowed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allowed: Mutex::new(true),
        }
    }

    /// Permits outbound requests until further notice.
    pub fn allow(&self) {
        self.set(true);
    }

    /// Denies outbound requests until further notice.
    pub fn block(&self) {
        self.set(false);
    }

    /// Returns the current decision.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        *self.lock()
    }

    /// Opens a scoped override that permits requests.
    ///
    /// The current decision is captured and the gate forced open in one
    /// mutex-guarded step. Dropping the guard restores the captured
    /// decision on every exit path, including panic unwind. The guard
    /// holds no lock while alive, so it may live across await points.
    ///
    /// Overlapping overrides from concurrent tasks are unsupported: each
    /// drop restores what that guard captured, so the final state depends
    /// on drop order.
    pub fn allowing_requests(&self) -> AllowGuard<'_> {
        let mut allowed = self.lock();
        let prior = *allowed;
        *allowed = true;
        drop(allowed);

        tracing::debug!(prior, "request gate override entered");
        AllowGuard { gate: self, prior }
    }

    /// Runs a closure with requests allowed, restoring the previous
    /// decision afterwards.
    pub fn with_requests_allowed<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.allowing_requests();
        f()
    }

    fn set(&self, allowed: bool) {
        *self.lock() = allowed;
        tracing::debug!(allowed, "request gate updated");
    }

    // The guarded bool has no invariants to restore, so a poisoned lock
    // is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, bool> {
        self.allowed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for a scoped gate override.
///
/// Restores the decision captured at creation when dropped.
#[must_use = "dropping the guard immediately restores the previous decision"]
#[derive(Debug)]
pub struct AllowGuard<'a> {
    gate: &'a RequestGate,
    prior: bool,
}

impl Drop for AllowGuard<'_> {
    fn drop(&mut self) {
        *self.gate.lock() = self.prior;
        tracing::debug!(restored = self.prior, "request gate override exited");
    }
}
