//! Advisory checks over a loaded [`ResearchConfig`].
//!
//! Nothing here rejects a config. The server logs each warning at startup
//! and keeps going with the values it was given.

use crate::types::ResearchConfig;

/// Levels accepted by the `logging.level` setting.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Whether `level` names one of [`LOG_LEVELS`], ignoring case.
pub fn is_known_log_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level.to_lowercase().as_str())
}

/// An advisory warning about a configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryWarning {
    /// Machine-readable warning code.
    pub code: &'static str,

    /// Human-readable warning message.
    pub message: String,

    /// Dotted path to the offending field.
    pub path: &'static str,
}

impl AdvisoryWarning {
    pub(crate) fn new(code: &'static str, path: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path,
        }
    }
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Collect advisory warnings for `cfg`.
pub fn validate(cfg: &ResearchConfig) -> Vec<AdvisoryWarning> {
    let mut warnings = vec![];

    let base_url = &cfg.services.tavily.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        warnings.push(AdvisoryWarning::new(
            "services.tavily.base_url.invalid",
            "services.tavily.base_url",
            format!("Expected an http(s) URL, got: '{base_url}'"),
        ));
    }

    if cfg.server.host.trim().is_empty() {
        warnings.push(AdvisoryWarning::new(
            "server.host.empty",
            "server.host",
            "Value cannot be empty",
        ));
    }
    if cfg.server.port == 0 {
        warnings.push(AdvisoryWarning::new(
            "server.port.ephemeral",
            "server.port",
            "Port 0 binds a random free port",
        ));
    }

    let limits = [
        ("agent.max_queries.zero", "agent.max_queries", cfg.agent.max_queries == 0),
        (
            "agent.max_results_per_query.zero",
            "agent.max_results_per_query",
            cfg.agent.max_results_per_query == 0,
        ),
        ("agent.max_sources.zero", "agent.max_sources", cfg.agent.max_sources == 0),
    ];
    for (code, path, is_zero) in limits {
        if is_zero {
            warnings.push(AdvisoryWarning::new(
                code,
                path,
                "Zero disables this limit's output; reports will be sparse",
            ));
        }
    }

    if !is_known_log_level(&cfg.logging.level) {
        warnings.push(AdvisoryWarning::new(
            "logging.level.invalid",
            "logging.level",
            format!(
                "Unknown log level '{}'. Expected one of: {}",
                cfg.logging.level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    warnings
}
