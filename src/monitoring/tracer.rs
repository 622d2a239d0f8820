/*!
 * Structured Tracing
 * Log setup for the daemon using the tracing crate
 *
 * The poll and failure lines emitted through this subscriber are the
 * daemon's observable surface: tests and external consumers read them off
 * stdout.
 */

use std::io::{self, IsTerminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing on stdout.
///
/// Environment variables:
/// - RUST_LOG: set log level (default: info)
/// - HOBBLER_LOG_JSON: enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("HOBBLER_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for production/parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stdout)
                    .with_target(true),
            )
            .init();
    } else {
        // Human-readable output; colors only when attached to a terminal
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stdout)
                    .with_target(false)
                    .with_ansi(io::stdout().is_terminal())
                    .compact(),
            )
            .init();
    }
}
