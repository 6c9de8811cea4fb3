use std::sync::Mutex;

use async_trait::async_trait;
use dlpscope_core::DlpTransport;
use dlpscope_domain::{
    DeidentifyContentRequest, DeidentifyContentResponse, DlpError, InspectContentRequest,
    InspectContentResponse, Result as DomainResult,
};

/// Stub `DlpTransport` that records every request and replays canned
/// responses.
///
/// A response that was never scripted is returned as an internal error so a
/// test fails loudly instead of hanging on a real network call.
#[derive(Default)]
pub struct RecordingTransport {
    deidentify_requests: Mutex<Vec<DeidentifyContentRequest>>,
    inspect_requests: Mutex<Vec<InspectContentRequest>>,
    deidentify_response: Mutex<Option<DomainResult<DeidentifyContentResponse>>>,
    inspect_response: Mutex<Option<DomainResult<InspectContentResponse>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deidentify_response(self, response: DomainResult<DeidentifyContentResponse>) -> Self {
        *self.deidentify_response.lock().unwrap() = Some(response);
        self
    }

    pub fn with_inspect_response(self, response: DomainResult<InspectContentResponse>) -> Self {
        *self.inspect_response.lock().unwrap() = Some(response);
        self
    }

    pub fn deidentify_requests(&self) -> Vec<DeidentifyContentRequest> {
        self.deidentify_requests.lock().unwrap().clone()
    }

    pub fn inspect_requests(&self) -> Vec<InspectContentRequest> {
        self.inspect_requests.lock().unwrap().clone()
    }

    /// Total number of calls across both endpoints.
    pub fn call_count(&self) -> usize {
        self.deidentify_requests.lock().unwrap().len() + self.inspect_requests.lock().unwrap().len()
    }
}

#[async_trait]
impl DlpTransport for RecordingTransport {
    async fn deidentify_content(
        &self,
        request: &DeidentifyContentRequest,
    ) -> DomainResult<DeidentifyContentResponse> {
        self.deidentify_requests.lock().unwrap().push(request.clone());
        self.deidentify_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(DlpError::Internal("no scripted deidentify response".into())))
    }

    async fn inspect_content(
        &self,
        request: &InspectContentRequest,
    ) -> DomainResult<InspectContentResponse> {
        self.inspect_requests.lock().unwrap().push(request.clone());
        self.inspect_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(DlpError::Internal("no scripted inspect response".into())))
    }
}
