use tracing_subscriber::EnvFilter;

/// Initialize the client logger
/// Honours RUST_LOG, defaulting to info; logs go to stderr so stdout carries results only
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
