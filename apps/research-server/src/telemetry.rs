//! Tracing subscriber setup.

use research_config::types::LoggingConfig;
use research_config::validation::is_known_log_level;
use tracing_subscriber::EnvFilter;

/// Level used when the configured one is not a level name.
const FALLBACK_LEVEL: &str = "info";

/// Filter directive used when `RUST_LOG` is unset.
///
/// Any `-v` flag beats the configured level. An unknown configured level
/// would parse as a target filter and mute everything, so it falls back to
/// `info` and the config warning stays visible.
pub fn default_directive(verbose: u8, logging: &LoggingConfig) -> String {
    match verbose {
        0 if is_known_log_level(&logging.level) => logging.level.to_lowercase(),
        0 => FALLBACK_LEVEL.into(),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    }
}

/// Install the global subscriber. Logs go to stderr.
pub fn init(verbose: u8, logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, logging)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}
