// Chunk: docs/chunks/logging - tracing subscriber setup
//! Log output to stderr.
//!
//! `RUST_LOG` wins when set; otherwise `default_filter` (the config's
//! `log_filter`) applies. Stdout belongs to the console.

use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG`, falling back to `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Installs the global subscriber. Does nothing if one is already installed.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
