use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// Diagnostics go to stderr so stdout only carries the report itself.
/// `RUST_LOG` takes precedence over the configured level. Calling this again
/// keeps the subscriber that is already installed.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
