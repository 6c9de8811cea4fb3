//! REST adapter for the DLP service
//!
//! Implements [`dlpscope_core::DlpTransport`] over JSON/HTTPS.

mod client;
mod types;

pub use client::DlpRestClient;
pub use types::{ServiceError, ServiceErrorEnvelope};
