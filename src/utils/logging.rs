use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only ever carries the score.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pit_score=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pit_score=warn"))
    };

    // Keep an already installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
