//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorPayload`] every failure renders as
//! - **[`extractors`]**: JSON, query and UUID path extractors that reject with [`AppError`]
//! - **[`http`]**: CORS and security header layers
//! - **[`server`]**: router assembly with OpenAPI docs, health checks, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorPayload};
pub use extractors::{JsonBody, QueryParams, UuidPath};
pub use server::{create_router, health_router, serve};
