use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` is honoured unless `verbose` is set, which forces debug output
/// for this crate.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pbf_bounds=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pbf_bounds=warn"))
    };

    // A subscriber may already be installed when embedded or under test.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
