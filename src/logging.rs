//! Logging setup for the gateway binary

/// Install a stderr `tracing` subscriber
///
/// The level comes from `RUST_LOG` and defaults to "warn". Stdout is left to
/// the server lines echoed during posting.
pub fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
