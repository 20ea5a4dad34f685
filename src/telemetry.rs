//! Tracing initialization for binaries and tests.
//!
//! The library itself only emits `tracing` events; a host that already
//! installs its own subscriber can ignore this module entirely.

use crate::error::{Error, Result};

/// Install an `EnvFilter` + fmt subscriber as the global default.
///
/// Filter level comes from `RUST_LOG`, defaulting to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init() -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Telemetry(format!("failed to init tracing subscriber: {e}")))
}
