//! Table de-identification with a transient crypto-hash key

use dlpscope_domain::constants::{EMAIL_ADDRESS, PHONE_NUMBER};
use dlpscope_domain::{
    global_parent, ContentItem, CryptoHashConfig, CryptoKey, DeidentifyConfig,
    DeidentifyContentRequest, DlpError, InfoType, InfoTypeTransformation, InfoTypeTransformations,
    PrimitiveTransformation, Result, Table,
};

/// Crypto-hash every phone number and email address using the named
/// transient key.
pub fn crypto_hash_rule(transient_key: &str) -> InfoTypeTransformation {
    InfoTypeTransformation {
        primitive_transformation: PrimitiveTransformation::CryptoHashConfig(CryptoHashConfig {
            crypto_key: CryptoKey::transient(transient_key),
        }),
        info_types: vec![InfoType::new(PHONE_NUMBER), InfoType::new(EMAIL_ADDRESS)],
    }
}

/// Build a `content:deidentify` request that hashes phone numbers and email
/// addresses found anywhere in `table`.
///
/// # Errors
/// Returns `DlpError::InvalidInput` if the project id or transient key is
/// empty, or if the table breaks the equal-row-width invariant.
pub fn build_deidentify_table_request(
    project_id: &str,
    transient_key: &str,
    table: Table,
) -> Result<DeidentifyContentRequest> {
    let parent = global_parent(project_id)?;

    if transient_key.trim().is_empty() {
        return Err(DlpError::InvalidInput("transient key name must not be empty".into()));
    }
    table.validate()?;

    Ok(DeidentifyContentRequest {
        parent,
        deidentify_config: DeidentifyConfig {
            info_type_transformations: InfoTypeTransformations {
                transformations: vec![crypto_hash_rule(transient_key)],
            },
        },
        item: ContentItem::Table(table),
    })
}
