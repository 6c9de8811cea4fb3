//! De-identification request and response model

use serde::{Deserialize, Serialize};

use super::content::ContentItem;
use super::inspect::InfoType;

/// Key that is generated by the service for the duration of one request.
///
/// Hashes produced with the same transient key name within a request are
/// consistent with each other but not across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransientCryptoKey {
    pub name: String,
}

/// Source of the key material used by a crypto transformation.
///
/// Exactly one source is set. Only transient keys are modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CryptoKey {
    Transient(TransientCryptoKey),
}

impl CryptoKey {
    pub fn transient(name: impl Into<String>) -> Self {
        Self::Transient(TransientCryptoKey { name: name.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHashConfig {
    pub crypto_key: CryptoKey,
}

/// The operation applied to each matched value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveTransformation {
    CryptoHashConfig(CryptoHashConfig),
}

/// Pairs a transformation with the info types it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoTypeTransformation {
    pub primitive_transformation: PrimitiveTransformation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info_types: Vec<InfoType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoTypeTransformations {
    pub transformations: Vec<InfoTypeTransformation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeidentifyConfig {
    pub info_type_transformations: InfoTypeTransformations,
}

impl DeidentifyConfig {
    /// Flattened view of every info type any rule applies to, in rule order.
    pub fn info_types(&self) -> impl Iterator<Item = &InfoType> {
        self.info_type_transformations
            .transformations
            .iter()
            .flat_map(|rule| rule.info_types.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeidentifyContentRequest {
    pub parent: String,
    pub deidentify_config: DeidentifyConfig,
    pub item: ContentItem,
}

/// Per-transformation outcome reported in the response overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationSummary {
    #[serde(default)]
    pub info_type: Option<InfoType>,
    /// int64 on the wire, encoded as a string.
    #[serde(default)]
    pub transformed_bytes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationOverview {
    #[serde(default)]
    pub transformed_bytes: Option<String>,
    #[serde(default)]
    pub transformation_summaries: Vec<TransformationSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeidentifyContentResponse {
    /// The transformed content. Optional here so that a response without it
    /// is reported as malformed by the caller instead of failing to decode.
    #[serde(default)]
    pub item: Option<ContentItem>,
    #[serde(default)]
    pub overview: Option<TransformationOverview>,
}
