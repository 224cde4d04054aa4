//! Tracing setup for the binary.

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives; falls back to `RUST_LOG`.
pub const ENV_LOG: &str = "CINESCOPE_LOG";

/// File to write logs to instead of stderr.
pub const ENV_LOG_FILE: &str = "CINESCOPE_LOG_FILE";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `CINESCOPE_LOG`, then `RUST_LOG`, then `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Logs go to stderr so command output on stdout stays clean. When
/// `CINESCOPE_LOG_FILE` is set they are appended to that file instead.
pub fn init_tracing() {
    let filter = env_filter();

    if let Ok(path) = std::env::var(ENV_LOG_FILE) {
        match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true);
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .try_init();
                return;
            }
            Err(e) => eprintln!("Warning: Failed to open log file {}: {}", path, e),
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
