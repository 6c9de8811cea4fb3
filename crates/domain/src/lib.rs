//! # dlpscope Domain
//!
//! Wire-level data model for the Cloud DLP de-identify and inspect calls.
//!
//! This crate contains:
//! - Request/response types that serialize to the service's JSON shape
//! - The domain error type and Result alias
//! - Client configuration structures
//! - Service constants
//!
//! ## Architecture
//! - No dependencies on other dlpscope crates
//! - No I/O; only serde-level data structures and validation

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
