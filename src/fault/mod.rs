//! Fault classification and expected-failure suppression.
//!
//! This module provides types and functions for:
//! - Classifying remote API errors ([`ErrorCategory`], [`classify`])
//! - Exposing an error's classification surface ([`ApiFault`])
//! - Tolerating transient failures ([`run_suppressing`], [`LenientTransport`])
//! - Anticipating deliberate rejections ([`expect_bad_request`])

mod classify;
mod suppress;


pub use classify::{ApiFault, ErrorCategory, classify};
pub use suppress::{
    ExpectedFailure, LenientTransport, TestFailure, expect_bad_request, run_suppressing,
};
