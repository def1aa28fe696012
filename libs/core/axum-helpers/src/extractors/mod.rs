//! Extractors that reject bad input with a structured [`ErrorResponse`](crate::ErrorResponse).

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
