//! Tracing subscriber setup for harness binaries and tests.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Sets up the tracing subscriber for a harness run.
///
/// The default level is INFO, or DEBUG when `verbose` is set; `RUST_LOG`
/// overrides either.
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Test binaries
/// should use [`init_for_tests`] instead.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Sets up a subscriber suitable for test binaries.
///
/// Output goes through the test writer so it stays attached to the test
/// that produced it. Safe to call from every test; only the first call
/// installs a subscriber.
pub fn init_for_tests() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::DEBUG.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .try_init();
}
