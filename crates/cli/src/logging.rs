use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber; stdout is reserved for program output.
/// `RUST_LOG` is honoured unless `verbose` forces debug output.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
