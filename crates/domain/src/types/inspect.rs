//! Inspection request and response model

use serde::{Deserialize, Serialize};

use super::content::ContentItem;
use crate::impl_wire_enum_conversions;

/// Identifier of a kind of sensitive data, e.g. `EMAIL_ADDRESS`.
///
/// Names are passed through to the service untouched; no local vocabulary is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfoType {
    pub name: String,
}

impl InfoType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordinal confidence that a finding is a true match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    #[default]
    LikelihoodUnspecified,
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

impl_wire_enum_conversions!(Likelihood {
    LikelihoodUnspecified => "LIKELIHOOD_UNSPECIFIED",
    VeryUnlikely => "VERY_UNLIKELY",
    Unlikely => "UNLIKELY",
    Possible => "POSSIBLE",
    Likely => "LIKELY",
    VeryLikely => "VERY_LIKELY",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectConfig {
    /// `None` leaves the choice of detectors to the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_types: Option<Vec<InfoType>>,
    #[serde(default)]
    pub include_quote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectContentRequest {
    pub parent: String,
    pub inspect_config: InspectConfig,
    pub item: ContentItem,
}

/// A single match reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub info_type: InfoType,
    /// Matched text; only present when quotes were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default)]
    pub likelihood: Likelihood,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectResult {
    /// The service omits the field entirely when nothing matched.
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub findings_truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectContentResponse {
    #[serde(default)]
    pub result: Option<InspectResult>,
}
