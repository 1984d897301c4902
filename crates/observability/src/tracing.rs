//! Log subscriber for the interactive binary.
//!
//! Stdout carries the menu and tables, so every log line is written to
//! stderr as JSON. The level comes from `RUST_LOG`, falling back to
//! [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Filter from `RUST_LOG`, or [`DEFAULT_FILTER`] when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the subscriber. Later calls leave the first one in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(false)
        .try_init();
}
