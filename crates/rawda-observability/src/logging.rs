use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the configured level.
const RAWDA_TARGETS: &[&str] = &[
    "rawda",
    "rawda_auth",
    "rawda_config",
    "rawda_i18n",
    "rawda_models",
];

/// Filter from `RUST_LOG`, or every Rawda crate at `log_level`.
pub fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = RAWDA_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, log_level))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(format!("warn,{}", directives))
    })
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info"),
///   overridden entirely by `RUST_LOG` when set
/// - **Format**: Compact, with targets, file and line numbers
/// - **Output**: stderr, so prompts on stdout stay readable
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(build_env_filter(&log_level));

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Console logging already initialized");
    }
}
