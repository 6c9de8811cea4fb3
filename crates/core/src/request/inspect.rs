//! Byte-content inspection

use dlpscope_domain::{
    global_parent, ByteContentItem, ContentItem, InfoType, InspectConfig, InspectContentRequest,
    Result,
};

/// Build a `content:inspect` request for an already loaded byte item.
///
/// Quotes are always requested. `info_types` of `None` sends no filter and
/// lets the service pick its default detectors.
///
/// # Errors
/// Returns `DlpError::InvalidInput` if the project id is empty.
pub fn build_inspect_request(
    project_id: &str,
    item: ByteContentItem,
    info_types: Option<Vec<InfoType>>,
) -> Result<InspectContentRequest> {
    Ok(InspectContentRequest {
        parent: global_parent(project_id)?,
        inspect_config: InspectConfig { info_types, include_quote: true },
        item: ContentItem::ByteItem(item),
    })
}
