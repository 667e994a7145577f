//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "QGATE_LOG";

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "qgate=info",
        1 => "qgate=debug",
        _ => "qgate=trace",
    }
}

/// Initialize the qgate tracing/logging system.
///
/// Reads `QGATE_LOG` for per-crate log levels.
/// Format: `QGATE_LOG=qgate_analysis=debug,qgate_core=warn`
///
/// Falls back to `default_directive(verbosity)` if `QGATE_LOG` is not set or
/// is invalid. Events go to stderr so stdout stays clean for reports.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
