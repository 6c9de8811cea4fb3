//! Content items and request scoping

use serde::{Deserialize, Serialize};

use super::table::Table;
use crate::constants::{GLOBAL_LOCATION, SUPPORTED_IMAGE_MIME_TYPES};
use crate::errors::{DlpError, Result};
use crate::impl_wire_enum_conversions;

/// Category of a byte payload.
///
/// The discriminants are the service's wire codes; `BytesTypeUnspecified`
/// (code 0) is not accepted by the service for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BytesType {
    BytesTypeUnspecified = 0,
    ImageJpeg = 1,
    ImageBmp = 2,
    ImagePng = 3,
    ImageSvg = 4,
}

impl_wire_enum_conversions!(BytesType {
    BytesTypeUnspecified => "BYTES_TYPE_UNSPECIFIED",
    ImageJpeg => "IMAGE_JPEG",
    ImageBmp => "IMAGE_BMP",
    ImagePng => "IMAGE_PNG",
    ImageSvg => "IMAGE_SVG",
});

impl BytesType {
    const IMAGE_TYPES: [BytesType; 4] =
        [BytesType::ImageJpeg, BytesType::ImageBmp, BytesType::ImagePng, BytesType::ImageSvg];

    /// Look up the image type for a MIME type.
    ///
    /// Only the four types in [`SUPPORTED_IMAGE_MIME_TYPES`] are recognised.
    /// `image/svg+xml` is accepted as a spelling of `image/svg`. Matching
    /// ignores ASCII case and any `;` parameters.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        let essence = if essence == "image/svg+xml" { "image/svg".to_string() } else { essence };

        SUPPORTED_IMAGE_MIME_TYPES
            .iter()
            .position(|candidate| *candidate == essence)
            .map(|index| Self::IMAGE_TYPES[index])
    }

    /// Numeric wire code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Wire code for a MIME type: list position + 1, or 0 when the type is not
/// supported.
///
/// Code 0 is not a valid inspection type; request builders use
/// [`BytesType::from_mime`] and reject unsupported files instead of sending
/// it.
pub fn type_code_for_mime(mime: &str) -> i32 {
    BytesType::from_mime(mime).map_or(BytesType::BytesTypeUnspecified.code(), BytesType::code)
}

/// Raw bytes plus their type. `data` holds the standard base64 encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteContentItem {
    #[serde(rename = "type")]
    pub bytes_type: BytesType,
    pub data: String,
}

/// Content to inspect or transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentItem {
    Value(String),
    Table(Table),
    ByteItem(ByteContentItem),
}

impl ContentItem {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Resource name every request is scoped under:
/// `projects/{project_id}/locations/global`.
///
/// # Errors
/// Returns `DlpError::InvalidInput` when the project id is empty.
pub fn global_parent(project_id: &str) -> Result<String> {
    let project_id = project_id.trim();
    if project_id.is_empty() {
        return Err(DlpError::InvalidInput("project id must not be empty".into()));
    }
    Ok(format!("projects/{project_id}/locations/{GLOBAL_LOCATION}"))
}
