//! De-identify and inspect pipelines

use std::path::Path;
use std::sync::Arc;

use dlpscope_domain::{Finding, InfoType, Result, Table};
use tracing::{debug, error, info, warn};

use crate::format::{deidentified_table, inspect_findings};
use crate::input::load_image;
use crate::ports::DlpTransport;
use crate::request::{build_deidentify_table_request, build_inspect_request};

/// Runs build -> send -> extract for each call pattern.
///
/// Each method is a complete transaction: nothing is cached between calls
/// and the transport is invoked at most once.
pub struct DlpService {
    transport: Arc<dyn DlpTransport>,
}

impl DlpService {
    /// Create a new service over the given transport
    pub fn new(transport: Arc<dyn DlpTransport>) -> Self {
        Self { transport }
    }

    /// Crypto-hash phone numbers and email addresses in `table`.
    ///
    /// # Errors
    /// Input validation errors are returned before the transport is called.
    /// Transport errors are returned unchanged; a response without a table is
    /// `DlpError::MalformedResponse`.
    pub async fn deidentify_table(
        &self,
        project_id: &str,
        transient_key: &str,
        table: Table,
    ) -> Result<Table> {
        let request = build_deidentify_table_request(project_id, transient_key, table)?;
        info!(
            parent = %request.parent,
            rows = request.item.as_table().map_or(0, Table::row_count),
            info_types = request.deidentify_config.info_types().count(),
            "De-identifying table"
        );

        let response = self.transport.deidentify_content(&request).await?;

        if let Some(overview) = &response.overview {
            debug!(
                transformed_bytes = overview.transformed_bytes.as_deref().unwrap_or("0"),
                summaries = overview.transformation_summaries.len(),
                "De-identification overview"
            );
        }

        deidentified_table(&response).cloned()
    }

    /// Inspect an image file for sensitive data.
    ///
    /// The file is loaded before anything is sent; if it cannot be read or
    /// its type is unsupported the error is logged and returned without
    /// contacting the service.
    ///
    /// # Errors
    /// - `DlpError::InvalidInput` / `DlpError::UnsupportedFileType` for a bad
    ///   file
    /// - transport errors, unchanged
    /// - `DlpError::MalformedResponse` if the response has no result
    pub async fn inspect_image_file(
        &self,
        project_id: &str,
        image_path: &Path,
        info_types: Option<Vec<InfoType>>,
    ) -> Result<Vec<Finding>> {
        let item = load_image(image_path).inspect_err(|err| {
            error!(path = %image_path.display(), error = %err, "Failed to load image");
        })?;

        let request = build_inspect_request(project_id, item, info_types)?;
        info!(
            parent = %request.parent,
            info_types = request.inspect_config.info_types.as_ref().map_or(0, Vec::len),
            "Inspecting image"
        );

        let response = self.transport.inspect_content(&request).await?;
        let result = inspect_findings(&response)?;

        if result.findings_truncated {
            warn!(findings = result.findings.len(), "Service truncated the findings list");
        }

        Ok(result.findings.clone())
    }
}
