//! Mojang API - endpoint declarations and JSON response wrappers.
//!
//! This crate does not send requests. It declares the URLs of the Mojang
//! web services (`endpoint`, `endpoints`) and wraps responses obtained by any
//! HTTP transport into attribute-accessible JSON containers (`response`).

pub mod endpoint;
pub mod endpoints;
pub mod response;

// Re-export key types
pub use endpoint::{Endpoint, EndpointSet, Endpoints, Service};
pub use endpoints::{ApiEndpoint, AuthEndpoint, SessionEndpoint, StatusEndpoint};
pub use response::{ApiResponse, AttrMap, JsonResponse, JsonShape, RawResponse, ResponseData};
