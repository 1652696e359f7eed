use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a tracing subscriber for the current test binary. Filtered by `RUST_LOG`.
pub fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}
