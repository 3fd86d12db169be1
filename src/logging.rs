use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber. `RUST_LOG` takes precedence over
/// `verbosity` (0 = warn, 1 = info, 2+ = debug). Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
