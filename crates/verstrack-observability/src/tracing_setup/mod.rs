//! Tracing setup: one global fmt subscriber, filtered by `VERSTRACK_LOG`.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use verstrack_core::config::ObservabilityConfig;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "VERSTRACK_LOG";

static INIT: Once = Once::new();

/// Install the subscriber with default settings.
///
/// Respects `VERSTRACK_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Install the subscriber using `config` for the fallback level and format.
///
/// Only the first call in a process has any effect. A subscriber installed
/// elsewhere beforehand is left in place.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config.log_level);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        let _ = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

/// Filter from `VERSTRACK_LOG`, or `fallback` when unset or unparsable.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
