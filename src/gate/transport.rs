//! Transport decorator enforcing the request gate.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::fault::ApiFault;
use crate::transport::{Request, Response, Transport};

use super::RequestGate;

/// Transport decorator that consults a [`RequestGate`] before every call.
///
/// When the gate is open the call delegates untouched. When it is closed
/// the call fails immediately with [`GatedError::Blocked`]; the inner
/// transport is never invoked, so no connection, write, or read happens.
#[derive(Debug, Clone)]
pub struct GatedTransport<T> {
    gate: Arc<RequestGate>,
    inner: T,
}

impl<T> GatedTransport<T> {
    /// Wraps the given transport behind the given gate.
    #[must_use]
    pub const fn new(gate: Arc<RequestGate>, inner: T) -> Self {
        Self { gate, inner }
    }

    /// Returns the gate this transport consults.
    #[must_use]
    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    /// Consumes the decorator, returning the wrapped transport.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

/// Error type for gated transport calls.
#[derive(Debug, Error)]
pub enum GatedError<E> {
    /// A call reached the transport while the gate was closed.
    ///
    /// This reports a defect in the calling test, not a remote
    /// condition: the test either touches the network by accident or
    /// forgot to open an override. It classifies as unclassified and is
    /// never converted into an expected failure.
    #[error("This function should not be called")]
    Blocked,

    /// The gate was open and the underlying transport failed.
    #[error(transparent)]
    Transport(E),
}

impl<E: ApiFault> ApiFault for GatedError<E> {
    fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Blocked => None,
            Self::Transport(e) => e.retry_after(),
        }
    }

    fn is_timed_out(&self) -> bool {
        match self {
            Self::Blocked => false,
            Self::Transport(e) => e.is_timed_out(),
        }
    }

    fn is_bad_request(&self) -> bool {
        match self {
            Self::Blocked => false,
            Self::Transport(e) => e.is_bad_request(),
        }
    }
}

impl<T: Transport> Transport for GatedTransport<T> {
    type Error = GatedError<T::Error>;

    async fn send(&self, request: Request) -> Result<Response, Self::Error> {
        if !self.gate.is_allowed() {
            tracing::warn!(url = %request.url, "blocked outbound request while the gate is closed");
            return Err(GatedError::Blocked);
        }

        self.inner.send(request).await.map_err(GatedError::Transport)
    }
}
