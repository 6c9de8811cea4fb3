//! Service constants
//!
//! Values that are part of the remote API contract rather than user
//! configuration.

/// Default REST endpoint for the DLP v2 API.
pub const DEFAULT_DLP_ENDPOINT: &str = "https://dlp.googleapis.com/v2";

/// Location segment every request is scoped under.
pub const GLOBAL_LOCATION: &str = "global";

/// Header used to bill a request to a project other than the token's.
pub const QUOTA_PROJECT_HEADER: &str = "x-goog-user-project";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("dlpscope/", env!("CARGO_PKG_VERSION"));

// Info types the crypto-hash table transformation applies to
pub const PHONE_NUMBER: &str = "PHONE_NUMBER";
pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";

/// Image MIME types accepted by byte inspection, in wire-code order
/// (position + 1 is the `BytesType` code).
pub const SUPPORTED_IMAGE_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/bmp", "image/png", "image/svg"];
