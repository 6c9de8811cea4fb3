//! Port interfaces for reaching the DLP service

use async_trait::async_trait;
use dlpscope_domain::{
    DeidentifyContentRequest, DeidentifyContentResponse, InspectContentRequest,
    InspectContentResponse, Result,
};

/// Sends a built request to the service and returns its response.
///
/// Implementations own authentication, connection handling and error
/// translation. Service and transport failures are returned unchanged to the
/// caller; nothing is retried.
#[async_trait]
pub trait DlpTransport: Send + Sync {
    /// Run `content:deidentify` for the request's parent.
    async fn deidentify_content(
        &self,
        request: &DeidentifyContentRequest,
    ) -> Result<DeidentifyContentResponse>;

    /// Run `content:inspect` for the request's parent.
    async fn inspect_content(&self, request: &InspectContentRequest)
        -> Result<InspectContentResponse>;
}
