//! Diagnostic tracing for the runner.
//!
//! Puzzle answers and the summary go to stdout. Everything emitted through
//! `tracing` goes to stderr and is filtered by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output is compact and on stderr.
///
/// ```bash
/// RUST_LOG=aoc=debug,aoc_2024=debug aoc --year 2024 --day 7
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
