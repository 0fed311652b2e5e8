use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a compact `tracing` subscriber for the process.
///
/// `RUST_LOG` takes precedence; otherwise the filter is `debug` when
/// `verbose` is set and `info` when not. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(verbose: bool) -> bool {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
