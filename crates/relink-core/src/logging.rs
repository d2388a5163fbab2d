//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with an env-filter.
///
/// `RELINK_LOG` overrides `default_filter` (e.g. `relink_engine=debug`).
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env("RELINK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
