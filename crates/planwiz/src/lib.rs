pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Output goes to stderr so it never
/// mixes with JSON written to stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
