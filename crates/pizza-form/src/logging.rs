//! # Logging
//!
//! `tracing` output for the binary. Logs go to stderr at WARN unless
//! `RUST_LOG` says otherwise; ordinary user mistakes log below that level.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` is unset or empty
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Filter built from `directives`, falling back to [`DEFAULT_LEVEL`]
pub fn filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .parse_lossy(directives)
}

/// Install the global subscriber, reading `RUST_LOG`
pub fn init() {
    // Logs go to stderr so they never mix with the form or a receipt
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(DEFAULT_LEVEL.into())
                .from_env_lossy(),
        )
        .init();
}
