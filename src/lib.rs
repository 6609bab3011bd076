//! botgate: network gating and fault classification for bot API test harnesses.
//!
//! A library for keeping a test run off the network unless explicitly
//! permitted, tolerating known-transient remote API failures, and probing
//! a locally running webhook receiver with synthetic deliveries.

pub mod fault;
pub mod gate;
pub mod logging;
pub mod probe;
pub mod transport;
