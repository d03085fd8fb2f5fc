//! Tracing setup for the binary.
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
//! Product output (the sequence report lines) goes to stdout and never
//! through the logger, so piping stdout yields exactly the game results.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// ```bash
/// RUST_LOG=turtle_escape=debug turtle-escape settings.json moves.json
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
