//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! layering environment overrides on top.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use dlpscope_domain::constants::DEFAULT_DLP_ENDPOINT;
use dlpscope_domain::DlpError;
use dlpscope_infra::{config, DlpRestClient};
use once_cell::sync::Lazy;
use tempfile::Builder;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn clear_env() {
    for key in [
        "DLP_ENDPOINT",
        "DLP_ACCESS_TOKEN",
        "GOOGLE_OAUTH_ACCESS_TOKEN",
        "DLP_QUOTA_PROJECT",
        "DLP_TIMEOUT_SECS",
        "DLP_USER_AGENT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_load_toml_then_env_overrides() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    clear_env();

    let mut file = Builder::new().suffix(".toml").tempfile().expect("temp file");
    writeln!(
        file,
        r#"
endpoint = "https://dlp.example.test/v2/"
access_token = "file-token"
quota_project = "file-project"
"#
    )
    .expect("write config");

    std::env::set_var("DLP_QUOTA_PROJECT", "env-project");

    let config = config::load(Some(file.path().to_path_buf())).expect("config");

    assert_eq!(config.endpoint, "https://dlp.example.test/v2");
    assert_eq!(config.access_token.as_deref(), Some("file-token"));
    assert_eq!(config.quota_project.as_deref(), Some("env-project"));

    clear_env();
}

#[test]
fn test_load_json_config_builds_rest_client() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    clear_env();

    let mut file = Builder::new().suffix(".json").tempfile().expect("temp file");
    file.write_all(br#"{"endpoint": "http://127.0.0.1:9/v2", "timeout_secs": 3}"#)
        .expect("write config");
    std::env::set_var("DLP_ACCESS_TOKEN", "env-token");

    let config = config::load(Some(file.path().to_path_buf())).expect("config");
    let client = DlpRestClient::from_config(&config).expect("client");

    assert_eq!(config.timeout_secs, 3);
    assert_eq!(client.endpoint(), "http://127.0.0.1:9/v2");

    clear_env();
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    clear_env();

    let result = config::load(Some(PathBuf::from("/nonexistent/dlpscope.toml")));
    assert!(matches!(result, Err(DlpError::Config(_))));
}

#[test]
fn test_env_only_configuration() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    clear_env();

    std::env::set_var("GOOGLE_OAUTH_ACCESS_TOKEN", "gcloud-token");

    let base = config::apply_env_overrides(Default::default()).expect("config");

    assert_eq!(base.endpoint, DEFAULT_DLP_ENDPOINT);
    assert_eq!(base.access_token.as_deref(), Some("gcloud-token"));
    assert!(DlpRestClient::from_config(&base).is_ok());

    clear_env();
}
