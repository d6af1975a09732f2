#![allow(dead_code)]

pub mod config;
pub mod mock_upstream;

/// Install a test-friendly subscriber once per test binary
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conduit_llm=debug")))
        .with_test_writer()
        .try_init();
}
