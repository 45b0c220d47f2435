//! Configuration loader with two-layer merge and env overrides.
//!
//! The loading process:
//! 1. Read global config from `~/.config/company-research/research.json`
//! 2. Read local config from `./research.json`
//! 3. Deep merge at JSON Value level (RFC 7396)
//! 4. Deserialize once into typed `ResearchConfig`
//! 5. Apply env var overrides (highest precedence)
//! 6. Run advisory validation

use crate::{merge::merge_patch, types::ResearchConfig, validation::AdvisoryWarning};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Filename for local config.
pub const LOCAL_FILE: &str = "research.json";

/// Directory name under `config_dir` for global config.
pub const GLOBAL_DIR: &str = "company-research";

/// Filename for global config.
pub const GLOBAL_FILE: &str = "research.json";

/// Env var overriding `server.port`.
const ENV_PORT: &str = "RESEARCH_PORT";

/// Resolved paths for config files.
#[derive(Debug, Clone)]
pub struct ResearchConfigPaths {
    /// Path to local config (`./research.json`).
    pub local: PathBuf,

    /// Path to global config, when a config dir exists on this platform.
    pub global: Option<PathBuf>,
}

impl ResearchConfigPaths {
    /// Standard locations for a given working directory.
    pub fn discover(local_dir: &Path) -> Self {
        Self {
            local: local_dir.join(LOCAL_FILE),
            global: dirs::config_dir().map(|base| base.join(GLOBAL_DIR).join(GLOBAL_FILE)),
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct LoadedResearchConfig {
    /// The loaded and merged configuration.
    pub config: ResearchConfig,

    /// Advisory warnings from validation.
    pub warnings: Vec<AdvisoryWarning>,

    /// Resolved config file paths.
    pub paths: ResearchConfigPaths,
}

/// Load and merge configuration from the standard global and local files.
pub fn load_merged(local_dir: &Path) -> Result<LoadedResearchConfig> {
    load_from(ResearchConfigPaths::discover(local_dir))
}

/// Load and merge configuration from explicit paths.
///
/// Missing files are treated as empty objects.
pub fn load_from(paths: ResearchConfigPaths) -> Result<LoadedResearchConfig> {
    let global_v = match &paths.global {
        Some(path) => read_json_object_or_empty(path)?,
        None => Value::Object(serde_json::Map::new()),
    };
    let local_v = read_json_object_or_empty(&paths.local)?;

    let merged = merge_patch(global_v, local_v);

    let mut cfg: ResearchConfig =
        serde_json::from_value(merged).context("Failed to deserialize merged research config")?;

    let mut warnings = apply_env_overrides(&mut cfg);
    warnings.extend(crate::validation::validate(&cfg));

    Ok(LoadedResearchConfig {
        config: cfg,
        warnings,
        paths,
    })
}

/// Apply environment variable overrides to the config.
///
/// Runs before any subscriber is installed, so unusable values come back as
/// warnings instead of being logged.
fn apply_env_overrides(cfg: &mut ResearchConfig) -> Vec<AdvisoryWarning> {
    let mut warnings = vec![];

    if let Some(v) = env_trimmed(tavily_async::config::ENV_BASE_URL) {
        cfg.services.tavily.base_url = v;
    }
    if let Some(k) = env_trimmed(tavily_async::config::ENV_API_KEY) {
        cfg.services.tavily.api_key = Some(secrecy::SecretString::from(k));
    }

    if let Some(v) = env_trimmed("RESEARCH_HOST") {
        cfg.server.host = v;
    }
    if let Some(v) = env_trimmed(ENV_PORT) {
        match v.parse() {
            Ok(port) => cfg.server.port = port,
            Err(_) => warnings.push(AdvisoryWarning::new(
                "server.port.invalid_env",
                "server.port",
                format!(
                    "Ignoring {ENV_PORT}='{v}': not a port number; using {}",
                    cfg.server.port
                ),
            )),
        }
    }

    if let Some(v) = env_trimmed("RESEARCH_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    if let Some(v) = env_trimmed("RESEARCH_LOG_JSON") {
        cfg.logging.json = v.eq_ignore_ascii_case("true") || v == "1";
    }

    warnings
}

/// Read and normalize an env var (trim + filter empty).
fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a JSON file as a Value, returning an empty object if the file doesn't exist.
fn read_json_object_or_empty(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let v: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    match v {
        Value::Object(_) => Ok(v),
        _ => anyhow::bail!("Config root must be a JSON object: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;
    use tempfile::TempDir;

    const ENV_VARS: [&str; 6] = [
        "TAVILY_API_KEY",
        "TAVILY_BASE_URL",
        "RESEARCH_HOST",
        "RESEARCH_PORT",
        "RESEARCH_LOG_LEVEL",
        "RESEARCH_LOG_JSON",
    ];

    /// Clears every override for the lifetime of the guard.
    struct CleanEnv(Vec<(&'static str, Option<String>)>);

    impl CleanEnv {
        fn new() -> Self {
            let saved = ENV_VARS
                .iter()
                .map(|k| (*k, std::env::var(k).ok()))
                .collect();
            for k in ENV_VARS {
                // SAFETY: tests that touch the env run under #[serial(env)].
                unsafe { std::env::remove_var(k) };
            }
            Self(saved)
        }

        fn set(&self, key: &str, value: &str) {
            // SAFETY: tests that touch the env run under #[serial(env)].
            unsafe { std::env::set_var(key, value) };
        }
    }

    impl Drop for CleanEnv {
        fn drop(&mut self) {
            for (k, v) in &self.0 {
                // SAFETY: tests that touch the env run under #[serial(env)].
                match v {
                    Some(v) => unsafe { std::env::set_var(k, v) },
                    None => unsafe { std::env::remove_var(k) },
                }
            }
        }
    }

    fn paths_in(temp: &TempDir) -> ResearchConfigPaths {
        ResearchConfigPaths {
            local: temp.path().join("local").join(LOCAL_FILE),
            global: Some(temp.path().join("global").join(GLOBAL_FILE)),
        }
    }

    fn write(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    #[serial(env)]
    fn test_no_files_returns_defaults() {
        let _env = CleanEnv::new();
        let temp = TempDir::new().unwrap();

        let loaded = load_from(paths_in(&temp)).unwrap();

        assert_eq!(loaded.config.server.port, 8000);
        assert_eq!(loaded.config.server.host, "0.0.0.0");
        assert!(loaded.config.services.tavily.api_key.is_none());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    #[serial(env)]
    fn test_local_overrides_global() {
        let _env = CleanEnv::new();
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);

        write(
            paths.global.as_ref().unwrap(),
            r#"{"server": {"host": "127.0.0.1", "port": 9000}, "agent": {"max_sources": 20}}"#,
        );
        write(&paths.local, r#"{"server": {"port": 9001}}"#);

        let loaded = load_from(paths).unwrap();
        assert_eq!(loaded.config.server.host, "127.0.0.1");
        assert_eq!(loaded.config.server.port, 9001);
        assert_eq!(loaded.config.agent.max_sources, 20);
    }

    #[test]
    #[serial(env)]
    fn test_env_overrides_files() {
        let env = CleanEnv::new();
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        write(&paths.local, r#"{"server": {"port": 9001}, "logging": {"level": "warn"}}"#);

        env.set("RESEARCH_PORT", "9500");
        env.set("RESEARCH_LOG_LEVEL", "debug");
        env.set("RESEARCH_LOG_JSON", "TRUE");
        env.set("TAVILY_API_KEY", "  tvly-env  ");
        env.set("TAVILY_BASE_URL", "http://localhost:4010");

        let loaded = load_from(paths).unwrap();
        assert_eq!(loaded.config.server.port, 9500);
        assert_eq!(loaded.config.logging.level, "debug");
        assert!(loaded.config.logging.json);
        assert_eq!(loaded.config.services.tavily.base_url, "http://localhost:4010");
        assert_eq!(
            loaded
                .config
                .services
                .tavily
                .api_key
                .as_ref()
                .unwrap()
                .expose_secret(),
            "tvly-env"
        );
    }

    #[test]
    #[serial(env)]
    fn test_bad_port_env_is_ignored_with_warning() {
        let env = CleanEnv::new();
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        write(&paths.local, r#"{"server": {"port": 9001}}"#);
        env.set("RESEARCH_PORT", "abc");

        let loaded = load_from(paths).unwrap();
        assert_eq!(loaded.config.server.port, 9001);

        let warning = loaded
            .warnings
            .iter()
            .find(|w| w.code == "server.port.invalid_env")
            .unwrap();
        assert!(warning.message.contains("RESEARCH_PORT='abc'"));
        assert!(warning.message.contains("9001"));
    }

    #[test]
    #[serial(env)]
    fn test_blank_api_key_env_is_absent() {
        let env = CleanEnv::new();
        let temp = TempDir::new().unwrap();
        env.set("TAVILY_API_KEY", "   ");

        let loaded = load_from(paths_in(&temp)).unwrap();
        assert!(loaded.config.services.tavily.api_key.is_none());
    }

    #[test]
    #[serial(env)]
    fn test_invalid_json_errors() {
        let _env = CleanEnv::new();
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        write(&paths.local, "not valid json");

        let err = load_from(paths).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    #[serial(env)]
    fn test_non_object_root_errors() {
        let _env = CleanEnv::new();
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        write(&paths.local, "[1, 2, 3]");

        let err = load_from(paths).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    #[serial(env)]
    fn test_wrong_type_fails_deserialization() {
        let _env = CleanEnv::new();
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        write(&paths.local, r#"{"server": {"port": "not-a-number"}}"#);

        let err = load_from(paths).unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize"));
    }

    #[test]
    fn test_discover_paths() {
        let temp = TempDir::new().unwrap();
        let paths = ResearchConfigPaths::discover(temp.path());

        assert_eq!(paths.local, temp.path().join(LOCAL_FILE));
        if let Some(global) = paths.global {
            assert!(global.ends_with("company-research/research.json"));
        }
    }
}
