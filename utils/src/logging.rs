//! Structured logging initialization via `tracing`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber, writing to stderr.
///
/// Respects the `RUST_LOG` environment variable for filtering and falls back
/// to `default_level` when it is unset or unparsable.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
