//! Wire types that only the REST adapter needs.

use serde::Deserialize;

/// Error body returned by the service on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorEnvelope {
    pub error: ServiceError,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceError {
    pub code: u16,
    pub message: String,
    /// Canonical status name, e.g. `INVALID_ARGUMENT`.
    pub status: String,
}

impl ServiceErrorEnvelope {
    /// Parse an error body, returning `None` when it is not the standard
    /// envelope.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
