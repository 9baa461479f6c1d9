//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "COMPLEXITY_LOG";

/// Filter used when `COMPLEXITY_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "complexity=info";

/// Initialize the tracing/logging system.
///
/// Reads `COMPLEXITY_LOG` for per-crate log levels.
/// Format: `COMPLEXITY_LOG=complexity_engine=debug,complexity_incidence=info`
///
/// Output goes to stderr so report sinks can own stdout.
/// Idempotent: only the first call installs the subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
