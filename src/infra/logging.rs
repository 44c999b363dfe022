//! Debug-channel logging through `tracing`.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the debug channel.
///
/// Call this once at startup. Safe to call multiple times.
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr so
/// it never interleaves with the report on stdout.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber may already be installed by the embedding process.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
