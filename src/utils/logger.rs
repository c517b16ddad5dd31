use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set. Verbose mode adds request-level
/// output from the HTTP client.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "freshrss_cleaner=debug,reqwest=debug,info"
    } else {
        "freshrss_cleaner=info"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(verbose).compact())
        .init();
}
