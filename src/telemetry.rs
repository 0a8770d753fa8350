//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber using `filter` as an
/// `EnvFilter` directive (e.g. `info`, `moviehub=debug`).
///
/// An unparsable directive falls back to `info`. Calling this twice is a
/// no-op.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
