//! Domain records persisted to the JSON record files, plus the request
//! input types they are built from. Wire names are camelCase to match the
//! frontend payloads.

pub mod errors;
pub mod product;
pub mod user;
