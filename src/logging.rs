//! Diagnostic logging
//!
//! User-facing output goes through the binary's `ui` module. Everything here
//! is developer diagnostics on stderr, filtered by `RUST_LOG`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used when `RUST_LOG` is unset and verbose output was requested
pub const VERBOSE_FILTER: &str = "warn,barrelgen=debug";

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), verbose);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

fn build_filter(rust_log: Option<String>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    match rust_log.filter(|s| !s.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(fallback)),
        None => EnvFilter::new(fallback),
    }
}
