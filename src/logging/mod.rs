//! Application logging functionality
//!
//! Logs go to stderr through a `tracing` fmt subscriber. The filter comes
//! from RUST_LOG, then the user settings, then a built-in default.

use tracing_subscriber::EnvFilter;

/// Filter used when neither RUST_LOG nor the settings file set one
pub const DEFAULT_FILTER: &str = "iconfont=info";

/// Pick the log filter directive
pub fn filter_directive(env_filter: Option<String>, configured: Option<&str>) -> String {
    env_filter
        .filter(|value| !value.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber
pub fn init(configured: Option<&str>) {
    let directive = filter_directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second initialization (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
