//! Conversion of classified failures into expected-failure signals.

use thiserror::Error;

use crate::transport::{Request, Response, Transport};

use super::{ApiFault, ErrorCategory, classify};

/// A failure the test run should record as expected rather than as a bug.
///
/// Carries a human-readable reason naming what was tolerated and the
/// original error's text. The test-framework boundary maps this onto its
/// own "mark as expected failure, continue run" signal.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct ExpectedFailure {
    reason: String,
}

impl ExpectedFailure {
    /// Creates an expected-failure signal with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Outcome of an operation run through the failure-suppression adapter.
///
/// `Expected` is the soft outcome: the operation failed in a way the
/// harness chooses to tolerate. `Hard` re-raises the original error
/// unchanged, so suppression can never mask an unrelated defect.
#[derive(Debug, Error)]
pub enum TestFailure<E> {
    /// A known transient or deliberately provoked failure.
    #[error("Expected failure: {0}")]
    Expected(ExpectedFailure),

    /// Any other failure, carried through verbatim.
    #[error(transparent)]
    Hard(E),
}

impl<E> TestFailure<E> {
    /// Returns true for the expected-failure outcome.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::Expected(_))
    }

    /// Returns the expected-failure reason, if this is the soft outcome.
    #[must_use]
    pub fn expected_reason(&self) -> Option<&str> {
        match self {
            Self::Expected(expected) => Some(expected.reason()),
            Self::Hard(_) => None,
        }
    }
}

/// Runs one operation, converting transient remote failures into
/// [`TestFailure::Expected`].
///
/// Success passes through unchanged. A failure classified as rate
/// limiting or timeout becomes the expected-failure signal, with a
/// reason naming the category and the original error's text. Anything
/// unclassified re-raises as [`TestFailure::Hard`] carrying the original
/// error.
///
/// # Errors
///
/// Returns [`TestFailure::Expected`] for suppressed transient failures
/// and [`TestFailure::Hard`] for every other failure.
pub async fn run_suppressing<T, E>(
    op: impl Future<Output = Result<T, E>>,
) -> Result<T, TestFailure<E>>
where
    E: ApiFault,
{
    match op.await {
        Ok(value) => Ok(value),
        Err(error) => Err(suppress_transient(error)),
    }
}

fn suppress_transient<E: ApiFault>(error: E) -> TestFailure<E> {
    match classify(&error) {
        ErrorCategory::RateLimited { retry_after } => {
            let reason = format!(
                "Not waiting {}s for flood control: {error}",
                retry_after.as_secs()
            );
            tracing::debug!(%reason, "suppressing rate-limit failure");
            TestFailure::Expected(ExpectedFailure::new(reason))
        }
        ErrorCategory::TimedOut => {
            let reason = format!("Ignoring timeout: {error}");
            tracing::debug!(%reason, "suppressing timeout failure");
            TestFailure::Expected(ExpectedFailure::new(reason))
        }
        ErrorCategory::Unclassified => TestFailure::Hard(error),
    }
}

/// Runs one operation that is expected to be rejected as a bad request.
///
/// Success passes through unchanged. A bad-request failure whose
/// rendered text contains `expected_message` as a substring becomes
/// [`TestFailure::Expected`] with the reason `"{reason}. {error text}"`.
/// A bad-request failure without the substring, and any failure of
/// another kind, re-raises as [`TestFailure::Hard`] so a different
/// rejection is still reported as a real bug.
///
/// # Errors
///
/// Returns [`TestFailure::Expected`] when the anticipated rejection
/// occurred and [`TestFailure::Hard`] for every other failure.
pub async fn expect_bad_request<T, E>(
    op: impl Future<Output = Result<T, E>>,
    expected_message: &str,
    reason: &str,
) -> Result<T, TestFailure<E>>
where
    E: ApiFault,
{
    match op.await {
        Ok(value) => Ok(value),
        Err(error) => {
            if error.is_bad_request() && error.to_string().contains(expected_message) {
                let reason = format!("{reason}. {error}");
                tracing::debug!(%reason, "anticipated bad-request rejection");
                Err(TestFailure::Expected(ExpectedFailure::new(reason)))
            } else {
                Err(TestFailure::Hard(error))
            }
        }
    }
}

/// Transport decorator that applies [`run_suppressing`] to every call.
///
/// Wrapping a whole transport makes an entire client lenient about
/// transient remote failures, instead of wrapping individual operations
/// at their call sites.
#[derive(Debug, Clone)]
pub struct LenientTransport<T> {
    inner: T,
}

impl<T> LenientTransport<T> {
    /// Wraps the given transport.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consumes the decorator, returning the wrapped transport.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Transport for LenientTransport<T>
where
    T: Transport,
    T::Error: ApiFault,
{
    type Error = TestFailure<T::Error>;

    async fn send(&self, request: Request) -> Result<Response, Self::Error> {
        run_suppressing(self.inner.send(request)).await
    }
}
