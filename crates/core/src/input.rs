//! Input normalization: info type lists and image files

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dlpscope_domain::{ByteContentItem, BytesType, DlpError, InfoType, Result};
use tracing::debug;

/// Split a comma-separated list of info type names.
///
/// Whitespace around names is trimmed and empty segments are dropped. An
/// absent or blank list yields `None`, meaning "no filter".
pub fn parse_info_types(raw: Option<&str>) -> Option<Vec<InfoType>> {
    let info_types: Vec<InfoType> = raw?
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(InfoType::new)
        .collect();

    if info_types.is_empty() {
        None
    } else {
        Some(info_types)
    }
}

/// MIME type implied by the file extension, if the extension is known.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}

/// Read an image file and wrap it as a base64-encoded byte item.
///
/// The file is read before its type is checked, so a missing file is always
/// reported as such.
///
/// # Errors
/// - `DlpError::InvalidInput` if the file cannot be read
/// - `DlpError::UnsupportedFileType` if the extension does not map to one of
///   the supported image types
pub fn load_image(path: &Path) -> Result<ByteContentItem> {
    let bytes = std::fs::read(path).map_err(|err| {
        DlpError::InvalidInput(format!("failed to read {}: {}", path.display(), err))
    })?;

    let mime = mime_for_path(path);
    let bytes_type = mime.and_then(BytesType::from_mime).ok_or_else(|| {
        DlpError::UnsupportedFileType(format!(
            "{} ({})",
            path.display(),
            mime.unwrap_or("unknown MIME type")
        ))
    })?;

    debug!(path = %path.display(), %bytes_type, size = bytes.len(), "Loaded image for inspection");

    Ok(ByteContentItem { bytes_type, data: STANDARD.encode(bytes) })
}
