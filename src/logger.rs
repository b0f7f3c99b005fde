use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "prime_finder=warn";

/// Build the log filter: an explicit directive wins, then RUST_LOG, then the default
pub fn log_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Logs go to stderr so they don't interleave with the prompts on stdout
pub fn init_cli_logger(directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(log_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
