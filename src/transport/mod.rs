//! Transport layer for issuing HTTP requests.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`Request`])
//! - Handling HTTP responses ([`Response`])
//! - Abstracting the request channel ([`Transport`])
//! - Production TCP transport ([`ReqwestTransport`])
//! - Unix-domain-socket transport ([`UnixTransport`])

mod client;
mod error;
mod http;
mod unix;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
pub(crate) mod test_server;
#[cfg(test)]
mod unix_tests;

pub use client::ReqwestTransport;
pub use error::TransportError;
pub use http::{Request, Response, Transport};
pub use unix::UnixTransport;
