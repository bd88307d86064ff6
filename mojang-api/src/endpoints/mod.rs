//! Endpoint declarations, one closed set per Mojang service.

pub mod api;
pub mod auth;
pub mod session;
pub mod status;

pub use api::ApiEndpoint;
pub use auth::AuthEndpoint;
pub use session::SessionEndpoint;
pub use status::StatusEndpoint;
