//! Logging bootstrap
//!
//! Hosts that already install a `tracing` subscriber can ignore this module;
//! everything in the gateway emits plain `tracing` events either way.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a global `tracing` subscriber with env-based filtering
/// (`RUST_LOG`, defaulting to `info`).
///
/// Safe to call more than once; later calls are no-ops if a subscriber is
/// already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
