//! Fault classification for remote API errors.

use std::time::Duration;

use crate::transport::TransportError;

/// Category assigned to a remote API failure.
///
/// Derived from an error at the moment of classification; nothing is
/// persisted. The first two variants describe transient conditions a
/// test run should tolerate, the last one everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The remote API asked the client to back off.
    RateLimited {
        /// Server-provided wait before the call may be retried.
        retry_after: Duration,
    },

    /// The operation exceeded its time budget.
    TimedOut,

    /// Anything else. Never suppressed.
    Unclassified,
}

impl ErrorCategory {
    /// Returns true for categories that describe transient remote
    /// conditions rather than defects.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::TimedOut)
    }
}

/// Classification surface an API error exposes.
///
/// The bot client's typed errors implement this trait so classification
/// stays independent of any concrete error hierarchy. Every accessor
/// defaults to "no", so an implementation only overrides the facets its
/// error can actually report.
pub trait ApiFault: std::error::Error {
    /// Server-requested back-off, when the error carries one.
    fn retry_after(&self) -> Option<Duration> {
        None
    }

    /// True when the error describes an exceeded time budget.
    fn is_timed_out(&self) -> bool {
        false
    }

    /// True when the remote API rejected the request as malformed.
    fn is_bad_request(&self) -> bool {
        false
    }
}

/// Classifies a remote API failure.
///
/// Pure function of the error's classification surface: no side effects,
/// cannot fail. Rate limiting is checked before timeout, so an error
/// reporting both facets classifies as [`ErrorCategory::RateLimited`].
#[must_use]
pub fn classify<E: ApiFault + ?Sized>(error: &E) -> ErrorCategory {
    if let Some(retry_after) = error.retry_after() {
        return ErrorCategory::RateLimited { retry_after };
    }

    if error.is_timed_out() {
        return ErrorCategory::TimedOut;
    }

    ErrorCategory::Unclassified
}

impl ApiFault for TransportError {
    fn is_timed_out(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
