//! Logging and tracing configuration
//!
//! Both binaries print their results on stdout, so diagnostics go to stderr
//! and stay off unless `RUST_LOG` asks for them.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing for a console exercise binary
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is WARN so the specified stdout contract is never polluted.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("console_exercises=warn,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
