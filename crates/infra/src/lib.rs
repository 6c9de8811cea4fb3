//! # dlpscope Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP client wrapper
//! - The REST adapter for the DLP service
//! - Configuration loading from files and the environment
//!
//! ## Architecture
//! - Implements traits defined in `dlpscope-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod dlp;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use dlp::DlpRestClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
