//! Extractors whose rejections render as [`crate::errors::ErrorPayload`].

pub mod json_body;
pub mod query;
pub mod uuid_path;

pub use json_body::JsonBody;
pub use query::QueryParams;
pub use uuid_path::UuidPath;
