//! Client configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DLP_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Configuration for talking to the DLP service.
///
/// Every field has a default so a config file only needs the values it
/// changes. The access token is optional here; a transport that needs one
/// reports its absence when it is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DlpConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub endpoint: String,
    /// OAuth2 bearer token sent with each request.
    pub access_token: Option<String>,
    /// Project billed for quota when it differs from the token's project.
    pub quota_project: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for DlpConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DLP_ENDPOINT.to_string(),
            access_token: None,
            quota_project: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
