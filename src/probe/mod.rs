//! Synthetic webhook deliveries for exercising a local receiver.
//!
//! This module provides:
//! - The probe builder and sender ([`WebhookProbe`])
//! - Payload length declaration modes ([`ContentLength`])
//! - Probe error reporting ([`ProbeError`])

mod error;
mod webhook;


pub use error::ProbeError;
pub use webhook::{ContentLength, WebhookProbe};
