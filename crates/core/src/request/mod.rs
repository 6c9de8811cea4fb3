//! Request builders
//!
//! Builders are pure: they validate caller input and assemble a request
//! without touching the network or the filesystem.

pub mod deidentify;
pub mod inspect;

pub use deidentify::{build_deidentify_table_request, crypto_hash_rule};
pub use inspect::build_inspect_request;
