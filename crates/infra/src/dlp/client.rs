//! DLP REST client

use std::time::Duration;

use async_trait::async_trait;
use dlpscope_core::DlpTransport;
use dlpscope_domain::constants::{DEFAULT_DLP_ENDPOINT, QUOTA_PROJECT_HEADER};
use dlpscope_domain::{
    DeidentifyContentRequest, DeidentifyContentResponse, DlpConfig, DlpError,
    InspectContentRequest, InspectContentResponse, Result,
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use super::types::ServiceErrorEnvelope;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Transport that sends requests to the DLP v2 REST API.
///
/// Each call is a single `POST {endpoint}/{parent}/content:{method}` with a
/// bearer token. Nothing is retried.
pub struct DlpRestClient {
    http_client: HttpClient,
    access_token: String,
    endpoint: String,
    quota_project: Option<String>,
}

impl DlpRestClient {
    /// Create a client for the public endpoint.
    ///
    /// # Arguments
    /// * `access_token` - OAuth2 bearer token
    /// * `http_client` - HTTP client carrying timeout and user agent
    pub fn new(access_token: impl Into<String>, http_client: HttpClient) -> Self {
        Self {
            http_client,
            access_token: access_token.into(),
            endpoint: DEFAULT_DLP_ENDPOINT.to_string(),
            quota_project: None,
        }
    }

    /// Build a client from loaded configuration.
    ///
    /// # Errors
    /// Returns `DlpError::Config` if no access token is configured or the
    /// endpoint is not a valid URL.
    pub fn from_config(config: &DlpConfig) -> Result<Self> {
        let access_token = config
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                DlpError::Config(
                    "no access token configured; set DLP_ACCESS_TOKEN or access_token in the \
                     config file"
                        .to_string(),
                )
            })?;

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        let mut client = Self::new(access_token, http_client).with_endpoint(&config.endpoint)?;
        if let Some(project) = &config.quota_project {
            client = client.with_quota_project(project.clone());
        }

        Ok(client)
    }

    /// Point the client at a different base URL (regional endpoint, emulator,
    /// or a test server).
    ///
    /// # Errors
    /// Returns `DlpError::Config` if `endpoint` does not parse as a URL.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Result<Self> {
        let endpoint = endpoint.as_ref().trim().trim_end_matches('/');
        Url::parse(endpoint).map_err(InfraError::from)?;
        self.endpoint = endpoint.to_string();
        Ok(self)
    }

    /// Bill quota to `project` via the `x-goog-user-project` header.
    pub fn with_quota_project(mut self, project: impl Into<String>) -> Self {
        self.quota_project = Some(project.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn method_url(&self, parent: &str, method: &str) -> Result<Url> {
        let raw = format!("{}/{}/content:{}", self.endpoint, parent, method);
        Ok(Url::parse(&raw).map_err(InfraError::from)?)
    }

    async fn post<B, R>(&self, parent: &str, method: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.method_url(parent, method)?;
        debug!(%url, method, "calling DLP service");

        let mut request = self
            .http_client
            .request(Method::POST, url)
            .bearer_auth(&self.access_token)
            .json(body);
        if let Some(project) = &self.quota_project {
            request = request.header(QUOTA_PROJECT_HEADER, project);
        }

        let response = self.http_client.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let error = error_from_response(status, response).await;
            warn!(status = status.as_u16(), method, error = %error, "DLP service returned an error");
            return Err(error);
        }

        let bytes = response.bytes().await.map_err(InfraError::from)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            DlpError::MalformedResponse(format!("failed to decode content:{method} response: {e}"))
        })
    }
}

#[async_trait]
impl DlpTransport for DlpRestClient {
    async fn deidentify_content(
        &self,
        request: &DeidentifyContentRequest,
    ) -> Result<DeidentifyContentResponse> {
        let response: DeidentifyContentResponse =
            self.post(&request.parent, "deidentify", request).await?;
        info!(parent = %request.parent, "de-identification request completed");
        Ok(response)
    }

    async fn inspect_content(
        &self,
        request: &InspectContentRequest,
    ) -> Result<InspectContentResponse> {
        let response: InspectContentResponse =
            self.post(&request.parent, "inspect", request).await?;
        info!(parent = %request.parent, "inspection request completed");
        Ok(response)
    }
}

/// Translate a non-success response into a domain error.
///
/// The message comes from the standard error envelope when present, else the
/// raw body, else the status reason.
async fn error_from_response(status: StatusCode, response: Response) -> DlpError {
    let body = response.text().await.unwrap_or_default();

    let message = match ServiceErrorEnvelope::parse(&body) {
        Some(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status.canonical_reason().unwrap_or("unknown status").to_string(),
    };

    match status.as_u16() {
        401 | 403 => DlpError::Auth(message),
        code => DlpError::Service { status: code, message },
    }
}
