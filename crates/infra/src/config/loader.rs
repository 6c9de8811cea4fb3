//! Configuration loader
//!
//! Loads [`DlpConfig`] from an optional file, then applies environment
//! overrides.
//!
//! ## Loading Strategy
//! 1. If a path is given, that file must exist and parse
//! 2. Otherwise the standard locations are probed; if none exists the
//!    defaults are used
//! 3. Environment variables override whatever the file set
//!
//! ## Environment Variables
//! - `DLP_ENDPOINT`: REST endpoint base URL
//! - `DLP_ACCESS_TOKEN`: OAuth2 bearer token (falls back to
//!   `GOOGLE_OAUTH_ACCESS_TOKEN`)
//! - `DLP_QUOTA_PROJECT`: project billed for quota
//! - `DLP_TIMEOUT_SECS`: request timeout in seconds
//! - `DLP_USER_AGENT`: user agent sent with requests
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./dlpscope.toml` or `./dlpscope.json` (current working directory)
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};

use dlpscope_domain::{DlpConfig, DlpError, Result};

const CONFIG_FILE_NAMES: [&str; 2] = ["dlpscope.toml", "dlpscope.json"];

/// Load configuration from `path` (or the probed default location) and apply
/// environment overrides.
///
/// # Errors
/// Returns `DlpError::Config` if an explicit path does not exist, a file
/// cannot be parsed, or an environment override has an invalid value.
pub fn load(path: Option<PathBuf>) -> Result<DlpConfig> {
    let from_file = match path.or_else(probe_config_paths) {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            DlpConfig::default()
        }
    };

    apply_env_overrides(from_file)
}

/// Load configuration from a file
///
/// Supports both JSON and TOML (detected by file extension). Missing keys
/// take their defaults.
///
/// # Errors
/// Returns `DlpError::Config` if:
/// - File not found
/// - File format is invalid
pub fn load_from_file(path: &Path) -> Result<DlpConfig> {
    if !path.exists() {
        return Err(DlpError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| DlpError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Override file values with any `DLP_*` environment variables that are set
/// and non-empty.
///
/// # Errors
/// Returns `DlpError::Config` if `DLP_TIMEOUT_SECS` is not a positive
/// integer.
pub fn apply_env_overrides(mut config: DlpConfig) -> Result<DlpConfig> {
    if let Some(endpoint) = env_nonempty("DLP_ENDPOINT") {
        config.endpoint = endpoint;
    }

    if let Some(token) =
        env_nonempty("DLP_ACCESS_TOKEN").or_else(|| env_nonempty("GOOGLE_OAUTH_ACCESS_TOKEN"))
    {
        config.access_token = Some(token);
    }

    if let Some(project) = env_nonempty("DLP_QUOTA_PROJECT") {
        config.quota_project = Some(project);
    }

    if let Some(raw) = env_nonempty("DLP_TIMEOUT_SECS") {
        config.timeout_secs = raw
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| DlpError::Config(format!("Invalid timeout: {}", raw)))?;
    }

    if let Some(agent) = env_nonempty("DLP_USER_AGENT") {
        config.user_agent = agent;
    }

    config.endpoint = config.endpoint.trim_end_matches('/').to_string();
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<DlpConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DlpError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DlpError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DlpError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Read an environment variable, treating empty values as unset.
fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::Builder;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 6] = [
        "DLP_ENDPOINT",
        "DLP_ACCESS_TOKEN",
        "GOOGLE_OAUTH_ACCESS_TOKEN",
        "DLP_QUOTA_PROJECT",
        "DLP_TIMEOUT_SECS",
        "DLP_USER_AGENT",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_env_overrides_file_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("DLP_ENDPOINT", "http://localhost:9000/v2/");
        std::env::set_var("DLP_ACCESS_TOKEN", "env-token");
        std::env::set_var("DLP_TIMEOUT_SECS", "5");

        let base = DlpConfig { access_token: Some("file-token".into()), ..DlpConfig::default() };
        let config = apply_env_overrides(base).unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/v2");
        assert_eq!(config.access_token.as_deref(), Some("env-token"));
        assert_eq!(config.timeout_secs, 5);

        clear_env();
    }

    #[test]
    fn test_google_token_fallback() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("GOOGLE_OAUTH_ACCESS_TOKEN", "gcloud-token");
        let config = apply_env_overrides(DlpConfig::default()).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("gcloud-token"));

        std::env::set_var("DLP_ACCESS_TOKEN", "dlp-token");
        let config = apply_env_overrides(DlpConfig::default()).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("dlp-token"));

        clear_env();
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("DLP_QUOTA_PROJECT", "   ");
        let config = apply_env_overrides(DlpConfig::default()).unwrap();
        assert!(config.quota_project.is_none());

        clear_env();
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        for bad in ["soon", "0", "-3"] {
            std::env::set_var("DLP_TIMEOUT_SECS", bad);
            let err = apply_env_overrides(DlpConfig::default()).unwrap_err();
            assert!(matches!(err, DlpError::Config(_)), "{bad} should be rejected");
        }

        clear_env();
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = write_config(
            ".toml",
            r#"
endpoint = "https://dlp.example.test/v2"
quota_project = "billing-project"
timeout_secs = 12
"#,
        );

        let config = load_from_file(file.path()).unwrap();

        assert_eq!(config.endpoint, "https://dlp.example.test/v2");
        assert_eq!(config.quota_project.as_deref(), Some("billing-project"));
        assert_eq!(config.timeout_secs, 12);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_load_from_file_json() {
        let file = write_config(".json", r#"{"access_token": "json-token"}"#);

        let config = load_from_file(file.path()).unwrap();

        assert_eq!(config.access_token.as_deref(), Some("json-token"));
        assert_eq!(config.endpoint, DlpConfig::default().endpoint);
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = load_from_file(Path::new("/nonexistent/dlpscope.toml"));
        assert!(matches!(result, Err(DlpError::Config(msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_load_from_file_invalid_format() {
        let file = write_config(".toml", "timeout_secs = \"not a number\"");
        assert!(matches!(
            load_from_file(file.path()),
            Err(DlpError::Config(msg)) if msg.contains("TOML")
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".yaml", "endpoint: x");
        assert!(load_from_file(file.path()).is_err());
    }
}
