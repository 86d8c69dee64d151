use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber for the smoke-test binary.
///
/// `RUST_LOG` wins when set; otherwise the default filter is `info`, raised
/// to `debug` for this crate in verbose mode.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,portal_smoke=debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
