use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cryptopulse_core=debug,cryptopulse_server=debug,info";

/// Install the global fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}
