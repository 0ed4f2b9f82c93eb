use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter used by the CLI. `RUST_LOG` always wins; otherwise
/// `default_directive` (from the config file) and then the verbosity flag decide.
pub fn cli_filter(verbose: bool, default_directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match default_directive {
        Some(directive) => EnvFilter::new(directive),
        None if verbose => EnvFilter::new("fetch_display=debug,info"),
        None => EnvFilter::new("fetch_display=info"),
    })
}

pub fn init_cli_logger(verbose: bool, default_directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose, default_directive))
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

/// JSON lines on stderr, for runs whose logs are collected by a machine.
/// Uses the same filter rules as the compact logger.
pub fn init_json_logger(verbose: bool, default_directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose, default_directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
