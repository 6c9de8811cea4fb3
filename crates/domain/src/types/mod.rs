//! Domain types and models
//!
//! Field names and enum spellings follow the DLP v2 REST representation so
//! that these types can be sent and received without an adapter layer.

pub mod content;
pub mod deidentify;
pub mod inspect;
pub mod table;

pub use content::{global_parent, type_code_for_mime, ByteContentItem, BytesType, ContentItem};
pub use deidentify::{
    CryptoHashConfig, CryptoKey, DeidentifyConfig, DeidentifyContentRequest,
    DeidentifyContentResponse, InfoTypeTransformation, InfoTypeTransformations,
    PrimitiveTransformation, TransformationOverview, TransformationSummary, TransientCryptoKey,
};
pub use inspect::{
    Finding, InfoType, InspectConfig, InspectContentRequest, InspectContentResponse,
    InspectResult, Likelihood,
};
pub use table::{FieldId, Row, Table, Value};
