use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "Aarogya";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Initialize tracing for hosts that embed the engine directly.
///
/// Callers that already install their own subscriber should skip this.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .try_init();

    tracing::info!("{} starting v{}", APP_NAME, APP_VERSION);
}
