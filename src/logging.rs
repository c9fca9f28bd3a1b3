//! Diagnostic logging to stderr
//!
//! stdout is reserved for the external tool's relayed output.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber; `RUST_LOG` wins over `verbose`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set (tests, embedding); keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
