//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the Wayfind tracing/logging system.
///
/// Reads the `WAYFIND_LOG` environment variable for per-subsystem log
/// levels. Format: `WAYFIND_LOG=wayfind_engine=debug,wayfind_store=info`
///
/// Falls back to `wayfind=info` if `WAYFIND_LOG` is not set or is invalid.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("WAYFIND_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    init_with(filter);
}

/// Initialize tracing with an explicit filter directive, e.g. from
/// [`WayfindConfig::effective_log_filter`](crate::config::WayfindConfig::effective_log_filter).
pub fn init_tracing_with_filter(directives: &str) {
    init_with(EnvFilter::new(directives));
}

fn init_with(filter: EnvFilter) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
