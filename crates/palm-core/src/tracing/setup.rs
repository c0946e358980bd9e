//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PALM_LOG";

/// Filter used when `PALM_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "palm=info";

/// Initialize the tracing/logging system.
///
/// Reads `PALM_LOG` for per-module log levels, for example
/// `PALM_LOG=palm_engine::trend=debug,palm_engine=info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
