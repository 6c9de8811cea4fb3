//! Logging setup and error labels.

use dlpscope_domain::DlpError;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for command output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Convert a `DlpError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DlpError) -> &'static str {
    match error {
        DlpError::Config(_) => "config",
        DlpError::Network(_) => "network",
        DlpError::Auth(_) => "auth",
        DlpError::InvalidInput(_) => "invalid_input",
        DlpError::UnsupportedFileType(_) => "unsupported_file_type",
        DlpError::Service { .. } => "service",
        DlpError::MalformedResponse(_) => "malformed_response",
        DlpError::Internal(_) => "internal",
    }
}
