//! Logging setup.
//!
//! Logs go to stderr so that search results on stdout stay machine-readable.
//! `RUST_LOG` takes precedence over the level passed on the command line.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize the logging subsystem with an explicit fallback level.
///
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init(level: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LEVEL)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init();
}
