//! Diagnostic logging via `tracing`.
//!
//! Diagnostics go to stderr so they never interleave with the audit log on
//! stdout. `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

fn filter_for(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.level.trim()))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init(settings: &LogSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(settings))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
