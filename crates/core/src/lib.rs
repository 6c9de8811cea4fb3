//! # dlpscope Core
//!
//! Request building, response formatting and the pipeline that joins them.
//!
//! This crate contains:
//! - The transport port (`DlpTransport`) the pipeline sends requests through
//! - Request builders for table de-identification and image inspection
//! - Input normalization (info type lists, image loading)
//! - Response formatters
//!
//! ## Architecture Principles
//! - Only depends on `dlpscope-domain`
//! - No HTTP code; the transport is injected
//! - Pure, testable builders and formatters

pub mod fixtures;
pub mod format;
pub mod input;
pub mod ports;
pub mod request;
pub mod service;

pub use fixtures::sample_table;
pub use format::{
    deidentified_table, format_deidentified_table, format_findings, inspect_findings,
    NO_FINDINGS,
};
pub use input::{load_image, mime_for_path, parse_info_types};
pub use ports::DlpTransport;
pub use request::{build_deidentify_table_request, build_inspect_request, crypto_hash_rule};
pub use service::DlpService;
