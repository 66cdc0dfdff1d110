//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a global stderr subscriber built by `build_subscriber`.
///
/// Calling this twice keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    if let Err(err) = tracing::subscriber::set_global_default(build_subscriber(verbose)) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Stderr subscriber. The filter comes from `CLIPOFFSET_LOG`, then
/// `RUST_LOG`, else `warn` (`debug` when `verbose`).
pub fn build_subscriber(verbose: bool) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = std::env::var("CLIPOFFSET_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("warn")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("warn")),
        );

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .finish()
}
