use tracing_subscriber::EnvFilter;

/// Default directive for a `-v` count; `RUST_LOG` overrides it.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "asterism=warn",
        1 => "asterism=info",
        2 => "asterism=debug",
        _ => "asterism=trace",
    }
}

/// Install a stderr `fmt` subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
